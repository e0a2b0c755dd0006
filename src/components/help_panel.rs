//! Help Panel Component
//!
//! Modal guide describing every major subsystem of the app. The content is
//! compiled in as a constant table; the only input is the close handler.

use dioxus::prelude::*;

use super::icons;

/// Guide topic, one per subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Quests,
    Tasks,
    Habits,
    Projects,
    FocusTimer,
    Companion,
    Coins,
    Shop,
    SkillTree,
    Achievements,
    Analytics,
    XpLevels,
}

impl HelpTopic {
    /// Render the Lucide glyph for this topic
    fn icon(self, size: u32) -> Element {
        match self {
            HelpTopic::Quests => icons::sword(size),
            HelpTopic::Tasks => icons::target(size),
            HelpTopic::Habits => icons::zap(size),
            HelpTopic::Projects => icons::folder_kanban(size),
            HelpTopic::FocusTimer => icons::timer(size),
            HelpTopic::Companion => icons::heart(size),
            HelpTopic::Coins => icons::coins(size),
            HelpTopic::Shop => icons::store(size),
            HelpTopic::SkillTree => icons::tree_deciduous(size),
            HelpTopic::Achievements => icons::trophy(size),
            HelpTopic::Analytics => icons::bar_chart(size),
            HelpTopic::XpLevels => icons::star(size),
        }
    }
}

/// One entry of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpSection {
    pub topic: HelpTopic,
    pub title: &'static str,
    pub description: &'static str,
}

/// The full guide, in display order
pub const HELP_SECTIONS: [HelpSection; 12] = [
    HelpSection {
        topic: HelpTopic::Quests,
        title: "Quests",
        description: "One-time tasks with XP rewards. Complete them to level up and earn coins. Choose rarity for bigger rewards!",
    },
    HelpSection {
        topic: HelpTopic::Tasks,
        title: "Tasks",
        description: "Enhanced tasks with priorities, energy types, and deadlines. Perfect for detailed productivity tracking.",
    },
    HelpSection {
        topic: HelpTopic::Habits,
        title: "Habits",
        description: "Recurring activities that build streaks. Complete daily to maintain your streak multiplier and earn bonus rewards.",
    },
    HelpSection {
        topic: HelpTopic::Projects,
        title: "Projects",
        description: "Group related tasks into projects with milestones. Track progress on larger goals over time.",
    },
    HelpSection {
        topic: HelpTopic::FocusTimer,
        title: "Focus Timer",
        description: "Pomodoro-style timer for deep work sessions. Earn XP and coins for focused work time.",
    },
    HelpSection {
        topic: HelpTopic::Companion,
        title: "Companion",
        description: "Your pixel pet companion! Keep them happy by completing tasks. They provide motivation and react to your progress.",
    },
    HelpSection {
        topic: HelpTopic::Coins,
        title: "Coins",
        description: "Currency earned from completing tasks. Spend them in the shop for upgrades and customization.",
    },
    HelpSection {
        topic: HelpTopic::Shop,
        title: "Shop",
        description: "Purchase upgrades, boosters, and cosmetics with your hard-earned coins.",
    },
    HelpSection {
        topic: HelpTopic::SkillTree,
        title: "Skill Tree",
        description: "Unlock permanent upgrades and abilities. Spend skill points earned from leveling up.",
    },
    HelpSection {
        topic: HelpTopic::Achievements,
        title: "Achievements",
        description: "Unlock badges by reaching milestones. Complete quests, maintain streaks, and more!",
    },
    HelpSection {
        topic: HelpTopic::Analytics,
        title: "Analytics",
        description: "View your productivity trends, energy balance, and weekly reports. Track burnout risk and optimize your workflow.",
    },
    HelpSection {
        topic: HelpTopic::XpLevels,
        title: "XP & Levels",
        description: "Earn XP from all activities. Level up to unlock skill points and show your progress!",
    },
];

/// Help and guide modal
#[component]
pub fn HelpPanel(on_close: EventHandler<()>) -> Element {
    let handle_close = move |_| {
        on_close.call(());
    };

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: handle_close,
            onkeydown: handle_keydown,

            div {
                class: "overlay-panel",
                onclick: move |e| e.stop_propagation(),

                // Header
                header { class: "overlay-header",
                    div { class: "overlay-heading",
                        div { class: "overlay-glyph overlay-glyph--mana",
                            {icons::help_circle(20)}
                        }
                        div {
                            h2 { class: "overlay-title", "Help & Guide" }
                            p { class: "overlay-subtitle", "Learn how to use QuestForge" }
                        }
                    }
                    button {
                        class: "overlay-close",
                        onclick: handle_close,
                        {icons::x(20)}
                    }
                }

                // Guide entries
                div { class: "help-sections",
                    for section in HELP_SECTIONS {
                        div { class: "help-section",
                            div { class: "help-section__glyph",
                                {section.topic.icon(16)}
                            }
                            div { class: "help-section__text",
                                h3 { class: "help-section__title", "{section.title}" }
                                p { class: "help-section__description", "{section.description}" }
                            }
                        }
                    }
                }

                // Footer tip
                div { class: "help-tip",
                    p { "\u{1F4A1} Tip: Complete daily challenges for bonus rewards!" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_guide_covers_all_twelve_subsystems() {
        assert_eq!(HELP_SECTIONS.len(), 12);
        let topics: HashSet<_> = HELP_SECTIONS.iter().map(|s| s.topic as usize).collect();
        assert_eq!(topics.len(), 12, "every topic appears exactly once");
    }

    #[test]
    fn test_guide_titles_are_unique_and_non_empty() {
        let titles: HashSet<_> = HELP_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), HELP_SECTIONS.len());
        for section in HELP_SECTIONS {
            assert!(!section.title.is_empty());
            assert!(!section.description.is_empty());
        }
    }

    #[test]
    fn test_guide_order_starts_with_quests_and_ends_with_levels() {
        assert_eq!(HELP_SECTIONS[0].title, "Quests");
        assert_eq!(HELP_SECTIONS[11].title, "XP & Levels");
    }
}
