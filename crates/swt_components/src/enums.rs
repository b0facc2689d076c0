//! Bootstrap 4 class-token enumerations

use std::fmt;
use std::str::FromStr;
use swt_core::SwtError;

macro_rules! css_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact token emitted into the markup.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SwtError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(SwtError::InvalidValue(format!(
                        "'{}' is not a valid {}",
                        other,
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

css_enum!(
    ButtonColor {
        Primary => "btn-primary",
        Secondary => "btn-secondary",
        Info => "btn-info",
        Success => "btn-success",
        Warning => "btn-warning",
        Danger => "btn-danger",
        OutlinePrimary => "btn-outline-primary",
        OutlineSecondary => "btn-outline-secondary",
        OutlineInfo => "btn-outline-info",
        OutlineSuccess => "btn-outline-success",
        OutlineWarning => "btn-outline-warning",
        OutlineDanger => "btn-outline-danger",
    }
);

css_enum!(
    ButtonSize {
        Small => "btn-sm",
        Large => "btn-lg",
    }
);

css_enum!(
    TooltipPlacement {
        Left => "left",
        Top => "top",
        Right => "right",
        Bottom => "bottom",
    }
);

css_enum!(
    /// Bar colors; the default (primary) bar carries no color class.
    ProgressColor {
        Success => "bg-success",
        Info => "bg-info",
        Warning => "bg-warning",
        Danger => "bg-danger",
    }
);

css_enum!(
    BadgeColor {
        Primary => "badge-primary",
        Secondary => "badge-secondary",
        Success => "badge-success",
        Danger => "badge-danger",
        Warning => "badge-warning",
        Info => "badge-info",
        Light => "badge-light",
        Dark => "badge-dark",
    }
);

css_enum!(
    AlertColor {
        Primary => "alert-primary",
        Secondary => "alert-secondary",
        Success => "alert-success",
        Danger => "alert-danger",
        Warning => "alert-warning",
        Info => "alert-info",
        Light => "alert-light",
        Dark => "alert-dark",
    }
);

css_enum!(
    BackgroundColor {
        Primary => "bg-primary",
        Secondary => "bg-secondary",
        Success => "bg-success",
        Danger => "bg-danger",
        Warning => "bg-warning",
        Info => "bg-info",
        Light => "bg-light",
        Dark => "bg-dark",
        White => "bg-white",
    }
);

css_enum!(
    TextColor {
        Primary => "text-primary",
        Secondary => "text-secondary",
        Success => "text-success",
        Danger => "text-danger",
        Warning => "text-warning",
        Info => "text-info",
        Light => "text-light",
        Dark => "text-dark",
        Muted => "text-muted",
        White => "text-white",
    }
);

css_enum!(
    BorderColor {
        Primary => "border-primary",
        Secondary => "border-secondary",
        Success => "border-success",
        Danger => "border-danger",
        Warning => "border-warning",
        Info => "border-info",
        Light => "border-light",
        Dark => "border-dark",
        White => "border-white",
    }
);

css_enum!(
    ModalSize {
        Large => "modal-lg",
        Small => "modal-sm",
    }
);

css_enum!(
    /// Values of the `data-toggle` attribute.
    DataToggle {
        Collapse => "collapse",
        Modal => "modal",
        Dropdown => "dropdown",
        Tooltip => "tooltip",
    }
);

css_enum!(
    /// Grid breakpoints a column width can start at.
    Breakpoint {
        Small => "sm",
        Medium => "md",
        Large => "lg",
        ExtraLarge => "xl",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(ButtonColor::OutlineDanger.as_str(), "btn-outline-danger");
        assert_eq!(ButtonSize::Small.to_string(), "btn-sm");
        assert_eq!(TextColor::Muted.as_str(), "text-muted");
        assert_eq!(ModalSize::Large.as_str(), "modal-lg");
        assert_eq!(DataToggle::Collapse.as_str(), "collapse");
        assert_eq!(Breakpoint::ExtraLarge.as_str(), "xl");
    }

    #[test]
    fn test_from_str_accepts_every_token() {
        for color in BadgeColor::ALL {
            assert_eq!(color.as_str().parse::<BadgeColor>().unwrap(), *color);
        }
        for placement in TooltipPlacement::ALL {
            assert_eq!(placement.as_str().parse::<TooltipPlacement>().unwrap(), *placement);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_token() {
        let err = "btn-rainbow".parse::<ButtonColor>().unwrap_err();
        assert!(matches!(err, SwtError::InvalidValue(msg) if msg.contains("btn-rainbow")));
    }
}
