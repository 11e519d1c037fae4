//! Personas and aesthetic themes
//!
//! Both are closed sets: every persona/theme is an enum variant with a static
//! attribute table, never a runtime-shaped configuration object.

use serde::{Deserialize, Serialize};

/// Static attributes of a persona
#[derive(Debug, Clone, Copy)]
pub struct PersonaProfile {
    pub display_name: &'static str,
    pub description: &'static str,
    pub stickers: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

/// AI chat personas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    SoftGirl,
    ChaoticNeutral,
    WellnessBestie,
    IndieOverthinker,
    MinimalistAi,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Self::SoftGirl,
        Self::ChaoticNeutral,
        Self::WellnessBestie,
        Self::IndieOverthinker,
        Self::MinimalistAi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoftGirl => "soft-girl",
            Self::ChaoticNeutral => "chaotic-neutral",
            Self::WellnessBestie => "wellness-bestie",
            Self::IndieOverthinker => "indie-overthinker",
            Self::MinimalistAi => "minimalist-ai",
        }
    }

    pub fn profile(&self) -> &'static PersonaProfile {
        match self {
            Self::SoftGirl => &PersonaProfile {
                display_name: "Soft Girl Bestie",
                description: "Sweet, nurturing, and aesthetically dreamy",
                stickers: &["🌸", "💕", "✨", "🦋", "☁️"],
                suggestions: &[
                    "Try some bubble tea and cozy reading",
                    "Paint your nails a pretty pastel",
                    "Make a vision board",
                ],
            },
            Self::ChaoticNeutral => &PersonaProfile {
                display_name: "Chaotic Neutral",
                description: "Unpredictable, witty, and delightfully unhinged",
                stickers: &["💀", "⚡", "🔮", "👁️", "🌙"],
                suggestions: &[
                    "Reorganize everything at 3am",
                    "Try that weird recipe you bookmarked",
                    "Start 5 new hobbies",
                ],
            },
            Self::WellnessBestie => &PersonaProfile {
                display_name: "Chill Wellness Bestie",
                description: "Mindful, grounding, and holistically supportive",
                stickers: &["🌿", "🧘", "☘️", "💚", "✨"],
                suggestions: &["Morning meditation", "Herbal tea ritual", "Gentle yoga flow"],
            },
            Self::IndieOverthinker => &PersonaProfile {
                display_name: "Indie Overthinker",
                description: "Introspective, artistic, and beautifully melancholic",
                stickers: &["🍂", "☕", "📚", "🎵", "💭"],
                suggestions: &[
                    "Journal with coffee",
                    "Discover new indie artists",
                    "Read poetry",
                ],
            },
            Self::MinimalistAi => &PersonaProfile {
                display_name: "Minimalist AI",
                description: "Clean, efficient, and elegantly simple",
                stickers: &["⚪", "▫️", "⭐", "💫", "◽"],
                suggestions: &["Declutter digital space", "Single-task focus", "Mindful breathing"],
            },
        }
    }

    /// The fixed favorites list reported in activity stats.
    ///
    /// Persona usage is not yet tracked per entry, so stats report this
    /// placeholder rather than deriving favorites from data.
    pub fn default_favorites() -> Vec<String> {
        [Self::SoftGirl, Self::WellnessBestie, Self::IndieOverthinker]
            .iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }
}

impl std::str::FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "soft-girl" => Ok(Self::SoftGirl),
            "chaotic-neutral" => Ok(Self::ChaoticNeutral),
            "wellness-bestie" => Ok(Self::WellnessBestie),
            "indie-overthinker" => Ok(Self::IndieOverthinker),
            "minimalist-ai" => Ok(Self::MinimalistAi),
            _ => Err(format!("Unknown persona: {}", s)),
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static attributes of a theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeProfile {
    pub display_name: &'static str,
    pub description: &'static str,
    pub stickers: &'static [&'static str],
    pub templates: &'static [&'static str],
}

/// Aesthetic journal themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    DarkAcademia,
    PastelKpop,
    Vaporwave,
    Cottagecore,
    Minimalist,
    Y2kCyber,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Self::DarkAcademia,
        Self::PastelKpop,
        Self::Vaporwave,
        Self::Cottagecore,
        Self::Minimalist,
        Self::Y2kCyber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkAcademia => "dark-academia",
            Self::PastelKpop => "pastel-kpop",
            Self::Vaporwave => "vaporwave",
            Self::Cottagecore => "cottagecore",
            Self::Minimalist => "minimalist",
            Self::Y2kCyber => "y2k-cyber",
        }
    }

    pub fn profile(&self) -> &'static ThemeProfile {
        match self {
            Self::DarkAcademia => &ThemeProfile {
                display_name: "Dark Academia",
                description: "Scholarly, mysterious, and intellectually romantic",
                stickers: &["📚", "🕯️", "🍂", "☕", "🖋️"],
                templates: &[
                    "Library Study Session",
                    "Autumn Contemplation",
                    "Late Night Thoughts",
                    "Coffee & Philosophy",
                ],
            },
            Self::PastelKpop => &ThemeProfile {
                display_name: "Pastel K-Pop",
                description: "Dreamy, colorful, and effortlessly cute",
                stickers: &["💖", "🌸", "✨", "🦋", "🌈"],
                templates: &[
                    "Bias Appreciation",
                    "Concert Memories",
                    "Aesthetic Mood",
                    "Friendship Goals",
                ],
            },
            Self::Vaporwave => &ThemeProfile {
                display_name: "Vaporwave",
                description: "Retro-futuristic with neon dreams and 80s nostalgia",
                stickers: &["🌴", "🌊", "🌅", "💎", "👾"],
                templates: &["Neon Dreams", "Retro Vibes", "Digital Sunset", "Synthwave Mood"],
            },
            Self::Cottagecore => &ThemeProfile {
                display_name: "Cottagecore",
                description: "Cozy, natural, and romantically rustic",
                stickers: &["🌻", "🍄", "🌿", "🐝", "🌾"],
                templates: &["Garden Journal", "Baking Adventures", "Nature Walk", "Cozy Evening"],
            },
            Self::Minimalist => &ThemeProfile {
                display_name: "Minimalist",
                description: "Clean, focused, and elegantly simple",
                stickers: &["⚪", "⚫", "▫️", "▪️", "⭐"],
                templates: &["Daily Reflection", "Goal Setting", "Mindful Moments", "Clean Slate"],
            },
            Self::Y2kCyber => &ThemeProfile {
                display_name: "Y2K Cyber",
                description: "Futuristic, metallic, and digitally bold",
                stickers: &["💎", "⚡", "🔮", "🤖", "🌐"],
                templates: &["Digital Dreams", "Cyber Thoughts", "Tech Mood", "Future Vibes"],
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dark-academia" => Ok(Self::DarkAcademia),
            "pastel-kpop" => Ok(Self::PastelKpop),
            "vaporwave" => Ok(Self::Vaporwave),
            "cottagecore" => Ok(Self::Cottagecore),
            "minimalist" => Ok(Self::Minimalist),
            "y2k-cyber" => Ok(Self::Y2kCyber),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
