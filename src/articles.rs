//! Static article pages, in reading order.

/// A run of text with one emphasis style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Span {
    Plain(&'static str),
    Bold(&'static str),
    Underline(&'static str),
}

/// A single article page. Content is a list of lines of styled spans.
#[derive(Debug)]
pub struct Article {
    pub title: &'static str,
    pub content: &'static [&'static [Span]],
}

use Span::{Bold, Plain, Underline};

pub static ARTICLES: &[Article] = &[
    Article {
        title: "Introduction to Accessibility",
        content: &[
            &[Bold("What is accessibility?")],
            &[
                Bold("Accessibility"),
                Plain(" is the practice of making your websites "),
                Underline("usable by as many people as possible."),
                Plain(" We traditionally think of this as being about people with disabilities, but the practice of making sites accessible also benefits other groups such as those using mobile devices, or those with slow network connections."),
            ],
            &[],
            &[Plain("Accessibility also applies to games and their difficulty. For example, a game that is too difficult to play is not accessible to many people. This is why many games have difficulty settings.")],
            &[],
            &[Plain("This website explores ways to make your games more accessible. Press Next to continue.")],
        ],
    },
    Article {
        title: "The Button Game",
        content: &[
            &[Bold("A game that is hard on purpose")],
            &[Plain("The Game panel is now open. A small button jumps to a random spot every 100 milliseconds. Click it to score a point.")],
            &[],
            &[
                Plain("Most people find this "),
                Underline("frustrating"),
                Plain(". Players with slower reactions, tremors, or a trackpad instead of a mouse may find it impossible."),
            ],
            &[],
            &[Plain("Keep the game in mind while you read on: each of the next pages unlocks a setting that makes it easier.")],
        ],
    },
    Article {
        title: "Size and Speed",
        content: &[
            &[Bold("Give players time and room")],
            &[
                Plain("Small targets that move quickly demand precise, fast input. Two simple settings help: "),
                Bold("a slower pace"),
                Plain(" and "),
                Bold("a bigger target"),
                Plain("."),
            ],
            &[],
            &[Plain("The Settings panel now has sliders for the movement delay and the button size. Try raising the delay and growing the button, then play again.")],
            &[],
            &[Plain("Many games ship a speed or game-time option for exactly this reason, and large hit areas help everyone on touch screens.")],
        ],
    },
    Article {
        title: "Autoclick",
        content: &[
            &[Bold("Removing an input entirely")],
            &[
                Plain("Some players cannot click reliably at all. An "),
                Underline("autoclick"),
                Plain(" option treats simply pointing at the target as a click."),
            ],
            &[],
            &[Plain("Turn on autoclick in the Settings panel and hover over the button. Each time the pointer enters it, you score.")],
            &[],
            &[Plain("Alternatives such as hold-to-toggle, dwell clicking and remappable controls follow the same idea: let the player choose how to act.")],
        ],
    },
    Article {
        title: "Color and Contrast",
        content: &[
            &[Bold("Seeing the target")],
            &[Plain("A target is only clickable if it can be seen. Low contrast between a button and its background makes the game harder for players with low vision or colour blindness.")],
            &[],
            &[
                Plain("The Settings panel now has a "),
                Bold("colour picker"),
                Plain(" for the game background, and a "),
                Bold("display mode"),
                Plain(" switch for light and dark themes."),
            ],
            &[],
            &[Underline("Accessible games let players tune what they see, not just how they play.")],
        ],
    },
];

pub fn article_count() -> usize {
    ARTICLES.len()
}

pub fn article(index: usize) -> Option<&'static Article> {
    ARTICLES.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_unique() {
        for (i, a) in ARTICLES.iter().enumerate() {
            for b in &ARTICLES[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn enough_articles_for_every_unlock() {
        use crate::progression::ProgressionPoint;
        let last = article_count() - 1;
        for point in ProgressionPoint::ALL {
            assert!(point.threshold() <= last, "{} unreachable", point.name());
        }
    }

    #[test]
    fn lookup_out_of_range() {
        assert!(article(0).is_some());
        assert!(article(article_count()).is_none());
    }
}
