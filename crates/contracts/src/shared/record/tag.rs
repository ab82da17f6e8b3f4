use serde::{Deserialize, Serialize};

/// Colour family of a badge or summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Purple,
    Orange,
    Gray,
}

impl Tone {
    /// Badge classes for light and dark themes
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Green => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
            Tone::Yellow => "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300",
            Tone::Red => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
            Tone::Blue => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300",
            Tone::Purple => "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-300",
            Tone::Orange => "bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-300",
            Tone::Gray => "bg-gray-100 text-gray-800 dark:bg-gray-900 dark:text-gray-300",
        }
    }

    /// Solid background used behind summary card icons
    pub fn card_class(&self) -> &'static str {
        match self {
            Tone::Green => "bg-green-500",
            Tone::Yellow => "bg-yellow-500",
            Tone::Red => "bg-red-500",
            Tone::Blue => "bg-blue-500",
            Tone::Purple => "bg-purple-500",
            Tone::Orange => "bg-orange-500",
            Tone::Gray => "bg-gray-500",
        }
    }
}

/// Icon shown next to a tag or on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertTriangle,
    BarChart,
    Calendar,
    CalendarDays,
    CheckCircle,
    Circle,
    Clock,
    CreditCard,
    Eye,
    FileText,
    Heart,
    Megaphone,
    Star,
    Target,
    TrendingUp,
    Trophy,
    UserCheck,
    UserX,
    Users,
    XCircle,
}

/// Presentation token derived from a tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayToken {
    pub tone: Tone,
    pub icon: Icon,
}

impl DisplayToken {
    /// Token for values outside a tag's declared set
    pub const NEUTRAL: DisplayToken = DisplayToken {
        tone: Tone::Gray,
        icon: Icon::Circle,
    };
}

/// Closed enumeration attached to a record: status, type, category, priority.
///
/// `all()` lists the members in declaration order, which is also the order
/// of filter tabs.
pub trait Tag: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    fn all() -> &'static [Self];

    /// Stable wire code (e.g. `"overdue"`)
    fn code(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;

    fn tone(&self) -> Tone;

    fn icon(&self) -> Icon {
        Icon::Circle
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tag| tag.code() == code)
    }

    fn token(&self) -> DisplayToken {
        DisplayToken {
            tone: self.tone(),
            icon: self.icon(),
        }
    }
}

/// Maps a raw code to its display token. Unknown codes get the neutral token.
pub fn classify<T: Tag>(code: &str) -> DisplayToken {
    T::from_code(code)
        .map(|tag| tag.token())
        .unwrap_or(DisplayToken::NEUTRAL)
}

/// Declares a closed tag enum together with its [`Tag`] implementation.
///
/// Each variant lists `(code, label, tone, icon)`; the code doubles as the
/// serde name.
macro_rules! closed_tag {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($code:literal, $label:literal, $tone:ident, $icon:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $crate::shared::record::Tag for $name {
            fn all() -> &'static [Self] {
                &[ $( $name::$variant, )+ ]
            }

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn tone(&self) -> $crate::shared::record::Tone {
                match self {
                    $( $name::$variant => $crate::shared::record::Tone::$tone, )+
                }
            }

            fn icon(&self) -> $crate::shared::record::Icon {
                match self {
                    $( $name::$variant => $crate::shared::record::Icon::$icon, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::shared::record::Tag::code(self))
            }
        }
    };
}

pub(crate) use closed_tag;

#[cfg(test)]
mod tests {
    use super::*;

    closed_tag! {
        /// Test-only traffic light
        pub enum Light {
            Go => ("go", "Go", Green, CheckCircle),
            Wait => ("wait", "Wait", Yellow, Clock),
            Stop => ("stop", "Stop", Red, AlertTriangle),
        }
    }

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for light in Light::all() {
            assert_eq!(Light::from_code(light.code()), Some(*light));
        }
        assert_eq!(Light::from_code("blink"), None);
    }

    #[test]
    fn test_classify_known_and_unknown() {
        assert_eq!(
            classify::<Light>("stop"),
            DisplayToken {
                tone: Tone::Red,
                icon: Icon::AlertTriangle
            }
        );
        assert_eq!(classify::<Light>("Stop"), DisplayToken::NEUTRAL);
        assert_eq!(classify::<Light>(""), DisplayToken::NEUTRAL);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Light::Wait).unwrap(), "\"wait\"");
        let parsed: Light = serde_json::from_str("\"go\"").unwrap();
        assert_eq!(parsed, Light::Go);
        assert_eq!(Light::Stop.to_string(), "stop");
    }

    #[test]
    fn test_badge_classes() {
        assert!(Tone::Gray.badge_class().starts_with("bg-gray-100"));
        assert_eq!(Tone::Purple.card_class(), "bg-purple-500");
    }
}
