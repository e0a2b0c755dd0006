//! Habit Card Component
//!
//! One habit's daily snapshot: polarity badge, streak and momentum stats,
//! scaled rewards, difficulty pips, and the action column. Every action is
//! emitted as a [`HabitIntent`] for the owner to dispatch; the card never
//! mutates anything itself.

use dioxus::prelude::*;
use questforge_core::{Habit, HabitIntent, HabitStats, Polarity};

use super::icons;
use super::pixel_button::{ButtonSize, ButtonVariant, PixelButton};

/// Number of pips in the difficulty indicator
pub const DIFFICULTY_SEGMENTS: usize = 5;

/// Which action controls a habit card shows
///
/// Decided once per render from polarity and today's completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSet {
    /// Complete is available; the miss control only for build habits
    Pending { with_miss: bool },
    /// Today is resolved: a static success mark replaces the action buttons
    Done,
}

impl ControlSet {
    pub fn for_habit(polarity: Polarity, completed_today: bool) -> Self {
        if completed_today {
            ControlSet::Done
        } else {
            ControlSet::Pending {
                with_miss: polarity.is_positive(),
            }
        }
    }

    pub fn shows_complete(&self) -> bool {
        matches!(self, ControlSet::Pending { .. })
    }

    pub fn shows_miss(&self) -> bool {
        matches!(self, ControlSet::Pending { with_miss: true })
    }
}

/// Get the badge text for a habit's polarity
fn polarity_badge(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Positive => "Build",
        Polarity::Negative => "Break",
    }
}

/// Tooltip for the complete control. Break habits read "Avoided" because
/// completing them means the behavior did not happen.
fn complete_tooltip(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Positive => "Complete habit",
        Polarity::Negative => "Avoided",
    }
}

/// Get the full CSS class list for the card container
fn card_class(polarity: Polarity, completed_today: bool) -> String {
    let accent = match polarity {
        Polarity::Positive => "habit-card--build",
        Polarity::Negative => "habit-card--break",
    };
    if completed_today {
        format!("habit-card {} habit-card--done", accent)
    } else {
        format!("habit-card {}", accent)
    }
}

/// Fill states for the difficulty pips, left to right
fn difficulty_pips(level: u8) -> [bool; DIFFICULTY_SEGMENTS] {
    std::array::from_fn(|i| (i as u8) < level)
}

/// Habit card
///
/// `completed_today` is derived state supplied by the owner (the habit
/// itself does not know about today). `stats` is optional; a missing
/// snapshot renders as a 0% success rate.
#[component]
pub fn HabitCard(
    habit: Habit,
    completed_today: bool,
    #[props(default = None)] stats: Option<HabitStats>,
    on_intent: EventHandler<HabitIntent>,
) -> Element {
    let controls = ControlSet::for_habit(habit.polarity, completed_today);
    let success_rate = stats.map(|s| s.success_rate).unwrap_or(0.0);
    let momentum_label = format!("x{:.1} momentum", habit.momentum_multiplier);
    let container_class = card_class(habit.polarity, completed_today);
    let badge_class = if habit.polarity.is_positive() {
        "polarity-badge polarity-badge--build"
    } else {
        "polarity-badge polarity-badge--break"
    };

    let complete_id = habit.id.clone();
    let miss_id = habit.id.clone();
    let delete_id = habit.id.clone();

    rsx! {
        div { class: "{container_class}",
            div { class: "habit-card__body",
                div { class: "habit-card__info",
                    // Badge row
                    div { class: "habit-card__meta",
                        span { class: "{badge_class}", {polarity_badge(habit.polarity)} }
                        if habit.current_streak > 0 {
                            span { class: "streak-badge",
                                {icons::flame(12)}
                                "{habit.current_streak} streak"
                            }
                        }
                    }

                    h3 { class: "habit-card__title", "{habit.title}" }

                    if let Some(description) = &habit.description {
                        p { class: "habit-card__description", "{description}" }
                    }

                    // Stats row
                    div { class: "habit-card__stats",
                        span { class: "stat-muted", "Best: {habit.best_streak}" }
                        span { class: "stat-muted stat-trend",
                            {icons::trending_up(12)}
                            "{success_rate:.0}%"
                        }
                        span { class: "stat-momentum",
                            "{momentum_label}"
                        }
                    }

                    // Rewards for completing today
                    div { class: "habit-card__rewards",
                        span { class: "reward-xp", "+{habit.scaled_xp()} XP" }
                        span { class: "reward-coins",
                            "+{habit.scaled_coins()}"
                            {icons::coins(12)}
                        }
                    }

                    // Difficulty pips
                    div { class: "habit-card__difficulty",
                        span { class: "difficulty-label", "Difficulty:" }
                        div { class: "difficulty-track",
                            for filled in difficulty_pips(habit.difficulty_level) {
                                div {
                                    class: if filled { "difficulty-pip difficulty-pip--filled" } else { "difficulty-pip" },
                                }
                            }
                        }
                    }
                }

                // Action column
                div { class: "habit-card__actions",
                    if controls.shows_complete() {
                        PixelButton {
                            variant: ButtonVariant::Xp,
                            size: ButtonSize::Icon,
                            title: Some(complete_tooltip(habit.polarity).to_string()),
                            onclick: move |_| {
                                on_intent.call(HabitIntent::Complete {
                                    id: complete_id.clone(),
                                    value: None,
                                });
                            },
                            {icons::check_circle(16)}
                        }
                        if controls.shows_miss() {
                            PixelButton {
                                variant: ButtonVariant::Danger,
                                size: ButtonSize::Icon,
                                title: Some("Mark as missed".to_string()),
                                onclick: move |_| {
                                    on_intent.call(HabitIntent::Miss(miss_id.clone()));
                                },
                                {icons::x_circle(16)}
                            }
                        }
                    } else {
                        div { class: "habit-card__done-mark", title: "Completed today",
                            {icons::check_circle(20)}
                        }
                    }
                    PixelButton {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        title: Some("Delete habit".to_string()),
                        onclick: move |_| {
                            on_intent.call(HabitIntent::Delete(delete_id.clone()));
                        },
                        {icons::trash(16)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_build_habit_shows_both_actions() {
        let controls = ControlSet::for_habit(Polarity::Positive, false);
        assert!(controls.shows_complete());
        assert!(controls.shows_miss());
    }

    #[test]
    fn test_pending_break_habit_hides_miss() {
        let controls = ControlSet::for_habit(Polarity::Negative, false);
        assert!(controls.shows_complete());
        assert!(!controls.shows_miss());
    }

    #[test]
    fn test_completed_habit_shows_no_actions() {
        for polarity in [Polarity::Positive, Polarity::Negative] {
            let controls = ControlSet::for_habit(polarity, true);
            assert_eq!(controls, ControlSet::Done);
            assert!(!controls.shows_complete());
            assert!(!controls.shows_miss());
        }
    }

    #[test]
    fn test_polarity_badges() {
        assert_eq!(polarity_badge(Polarity::Positive), "Build");
        assert_eq!(polarity_badge(Polarity::Negative), "Break");
    }

    #[test]
    fn test_complete_tooltip_reads_avoided_for_break_habits() {
        assert_eq!(complete_tooltip(Polarity::Positive), "Complete habit");
        assert_eq!(complete_tooltip(Polarity::Negative), "Avoided");
    }

    #[test]
    fn test_card_class_marks_completion() {
        assert_eq!(
            card_class(Polarity::Positive, false),
            "habit-card habit-card--build"
        );
        assert_eq!(
            card_class(Polarity::Negative, true),
            "habit-card habit-card--break habit-card--done"
        );
    }

    #[test]
    fn test_difficulty_pips_fill_from_the_left() {
        assert_eq!(difficulty_pips(0), [false; 5]);
        assert_eq!(difficulty_pips(3), [true, true, true, false, false]);
        assert_eq!(difficulty_pips(5), [true; 5]);
    }

    #[test]
    fn test_difficulty_pips_saturate_above_the_scale() {
        assert_eq!(difficulty_pips(9), [true; 5]);
    }
}
