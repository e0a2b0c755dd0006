//! Pixel Button Component
//!
//! Shared chunky-bordered button used by the habit cards and panels.
//! Variants map to quest colors, sizes to the two layouts we need:
//! small text buttons and square icon buttons.

use dioxus::prelude::*;

/// Visual variant of a pixel button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Neutral action
    #[default]
    Default,
    /// Rewarding action (XP green)
    Xp,
    /// Destructive or losing action (health red)
    Danger,
    /// De-emphasized or unavailable action
    Ghost,
}

impl ButtonVariant {
    /// Get the CSS modifier class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "pixel-btn--default",
            ButtonVariant::Xp => "pixel-btn--xp",
            ButtonVariant::Danger => "pixel-btn--danger",
            ButtonVariant::Ghost => "pixel-btn--ghost",
        }
    }
}

/// Size of a pixel button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Compact text button
    #[default]
    Small,
    /// Square button holding a single glyph
    Icon,
}

impl ButtonSize {
    /// Get the CSS modifier class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "pixel-btn--sm",
            ButtonSize::Icon => "pixel-btn--icon",
        }
    }
}

/// Chunky retro button
///
/// # Examples
///
/// ```rust
/// rsx! {
///     PixelButton {
///         variant: ButtonVariant::Xp,
///         size: ButtonSize::Icon,
///         title: Some("Complete habit".to_string()),
///         onclick: move |_| {
///             // Emit the matching intent
///         },
///         {icons::check_circle(16)}
///     }
/// }
/// ```
#[component]
pub fn PixelButton(
    /// Color variant
    #[props(default)]
    variant: ButtonVariant,
    /// Layout size
    #[props(default)]
    size: ButtonSize,
    /// Disable interaction (eligibility is decided by the caller)
    #[props(default = false)]
    disabled: bool,
    /// Optional tooltip text
    #[props(default = None)]
    title: Option<String>,
    /// Click handler
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "pixel-btn {variant.class()} {size.class()}",
            disabled: disabled,
            title: title,
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes_are_distinct() {
        let variants = [
            ButtonVariant::Default,
            ButtonVariant::Xp,
            ButtonVariant::Danger,
            ButtonVariant::Ghost,
        ];
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(ButtonSize::Small.class(), "pixel-btn--sm");
        assert_eq!(ButtonSize::Icon.class(), "pixel-btn--icon");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Small);
    }
}
