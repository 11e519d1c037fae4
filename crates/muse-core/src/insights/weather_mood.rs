//! Weather correlation insight
//!
//! Compares mean mood intensity between clear-sky and rainy entries. Only
//! entries that captured a weather snapshot at creation time participate.

use crate::models::{Insight, InsightKind, JournalEntry};

use super::engine::{InsightRule, RuleContext};

/// Entries carrying weather data before any comparison is attempted
const MIN_WEATHER_ENTRIES: usize = 5;

/// Entries required in each condition group
const MIN_GROUP_SIZE: usize = 3;

/// Mean intensity gap that counts as a correlation
const INTENSITY_GAP: f64 = 1.0;

fn mean_intensity_for(entries: &[&JournalEntry], condition: &str) -> (usize, f64) {
    let intensities: Vec<f64> = entries
        .iter()
        .filter(|e| {
            e.weather
                .as_ref()
                .is_some_and(|w| w.condition == condition)
        })
        .map(|e| e.mood.intensity as f64)
        .collect();

    if intensities.is_empty() {
        (0, 0.0)
    } else {
        let mean = intensities.iter().sum::<f64>() / intensities.len() as f64;
        (intensities.len(), mean)
    }
}

/// Rule that correlates mood with captured weather conditions
pub struct WeatherMoodRule;

impl WeatherMoodRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeatherMoodRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for WeatherMoodRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Weather
    }

    fn name(&self) -> &'static str {
        "Weather Correlation"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        let with_weather: Vec<&JournalEntry> =
            ctx.entries.iter().filter(|e| e.weather.is_some()).collect();
        if with_weather.len() < MIN_WEATHER_ENTRIES {
            return None;
        }

        let (clear_count, clear_mean) = mean_intensity_for(&with_weather, "Clear");
        let (rain_count, rain_mean) = mean_intensity_for(&with_weather, "Rain");
        if clear_count < MIN_GROUP_SIZE || rain_count < MIN_GROUP_SIZE {
            return None;
        }

        let data_points = clear_count + rain_count;
        if clear_mean - rain_mean > INTENSITY_GAP {
            Some(Insight {
                kind: InsightKind::Weather,
                title: "Sunshine Boost".to_string(),
                description: "Your mood tends to be higher on sunny days! ☀️".to_string(),
                recommendation: Some(
                    "On cloudy days, try light therapy or vitamin D supplements.".to_string(),
                ),
                confidence: 0.6,
                data_points,
            })
        } else if rain_mean - clear_mean > INTENSITY_GAP {
            Some(Insight {
                kind: InsightKind::Weather,
                title: "Rainy Day Lover".to_string(),
                description: "You actually feel better on rainy days! 🌧️".to_string(),
                recommendation: Some(
                    "You might be someone who enjoys cozy, contemplative weather.".to_string(),
                ),
                confidence: 0.6,
                data_points,
            })
        } else {
            None
        }
    }
}
