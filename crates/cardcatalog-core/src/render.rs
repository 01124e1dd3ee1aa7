//! Render Pipeline
//!
//! Projects the filtered cards and the controller state into a
//! [`RenderFrame`]: a complete, self-contained description of every surface
//! (card area, count readout, both category selectors, search inputs).
//! Frames are rebuilt from scratch on every state change; nothing is diffed.
//!
//! Text inside a frame is kept raw. Escaping happens when a frame is
//! projected to markup, either by [`RenderFrame::to_html`] or by the UI
//! toolkit's text nodes.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::category::{display_label, UNCATEGORIZED};
use crate::state::{DrawerState, UiState};

/// Text shown in the card area when boot orchestration fails.
pub const LOAD_FAILURE_TEXT: &str = "Failed to load cards.";

/// Label of the synthetic "no category filter" control.
pub const ALL_LABEL: &str = "All";

/// Text of the empty-state indicator.
pub const EMPTY_STATE_TEXT: &str = "No cards match the current filters.";

const CODE_FENCE: &str = "```";

/// How a category control decides whether it is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightRule {
    /// Compare the control's raw category value with the active category.
    /// The "All" control is active when no category is selected.
    #[default]
    ByValue,
    /// Compare display labels; with no active category the "Uncategorized"
    /// control lights up. A real category named "Uncategorized" is then
    /// indistinguishable from "no filter".
    ByLabel,
}

/// Where the boot sequence currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BootStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// One block of a formatted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerBlock {
    Paragraph(String),
    Code(String),
}

/// A card ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub question: String,
    pub category_label: String,
    /// Comma-joined tags, `None` when the card has no tags.
    pub tags: Option<String>,
    pub answer: Vec<AnswerBlock>,
}

impl RenderedCard {
    pub fn from_card(card: &Card) -> Self {
        let tags = if card.tags.is_empty() {
            None
        } else {
            Some(card.tags.join(", "))
        };

        Self {
            question: card.question.clone(),
            category_label: display_label(card.trimmed_category()).to_string(),
            tags,
            answer: format_answer(&card.answer),
        }
    }
}

/// One control in a category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    /// Raw trimmed category value; `None` for the "All" control.
    pub value: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Everything every surface needs to draw itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub status: BootStatus,
    pub cards: Vec<RenderedCard>,
    pub shown: usize,
    pub total: usize,
    pub categories: Vec<CategoryControl>,
    /// What the user literally typed; mirrored into every search input.
    pub search_input: String,
    pub drawer_open: bool,
}

impl RenderFrame {
    /// Frame shown while the boot fetches are still in flight.
    pub fn loading() -> Self {
        Self::default()
    }

    /// Terminal frame after an orchestration failure.
    pub fn failed() -> Self {
        Self {
            status: BootStatus::Failed,
            ..Self::default()
        }
    }

    /// `"<shown> / <total> cards"`
    pub fn count_readout(&self) -> String {
        format!("{} / {} cards", self.shown, self.total)
    }

    /// Whether the empty-state indicator replaces the card list.
    pub fn is_empty(&self) -> bool {
        self.status == BootStatus::Ready && self.cards.is_empty()
    }

    /// Project the frame to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        match self.status {
            BootStatus::Loading => {
                html.push_str("<div id=\"cards\"><p class=\"loading\">Loading\u{2026}</p></div>\n");
                return html;
            }
            BootStatus::Failed => {
                html.push_str(&format!(
                    "<div id=\"cards\"><p class=\"load-failure\">{}</p></div>\n",
                    escape_html(LOAD_FAILURE_TEXT)
                ));
                return html;
            }
            BootStatus::Ready => {}
        }

        let search = escape_html(&self.search_input);
        html.push_str(&format!(
            "<header><input class=\"search-input\" type=\"search\" value=\"{search}\"></header>\n"
        ));
        html.push_str(&self.category_list_html("desktop"));

        let drawer_class = if self.drawer_open { "drawer open" } else { "drawer" };
        html.push_str(&format!("<aside class=\"{drawer_class}\">\n"));
        html.push_str(&format!(
            "<input class=\"search-input\" type=\"search\" value=\"{search}\">\n"
        ));
        html.push_str(&self.category_list_html("mobile"));
        html.push_str("</aside>\n");

        html.push_str(&format!(
            "<p class=\"card-count\">{}</p>\n",
            escape_html(&self.count_readout())
        ));

        html.push_str("<div id=\"cards\">\n");
        for card in &self.cards {
            html.push_str(&card_html(card));
        }
        html.push_str("</div>\n");

        let hidden = if self.is_empty() { "" } else { " hidden" };
        html.push_str(&format!(
            "<p class=\"empty-state\"{hidden}>{}</p>\n",
            escape_html(EMPTY_STATE_TEXT)
        ));

        html
    }

    fn category_list_html(&self, surface: &str) -> String {
        let mut html = format!("<nav class=\"category-list {surface}\">\n");
        for control in &self.categories {
            let class = if control.active {
                "category-control active"
            } else {
                "category-control"
            };
            let value = control
                .value
                .as_deref()
                .map(|v| format!(" data-category=\"{}\"", escape_html(v)))
                .unwrap_or_default();
            html.push_str(&format!(
                "<button class=\"{class}\"{value}>{}</button>\n",
                escape_html(&control.label)
            ));
        }
        html.push_str("</nav>\n");
        html
    }
}

fn card_html(card: &RenderedCard) -> String {
    let mut html = String::from("<article class=\"card\">\n");
    html.push_str(&format!(
        "<h3 class=\"question\">{}</h3>\n",
        escape_html(&card.question)
    ));
    html.push_str(&format!(
        "<span class=\"category\">{}</span>\n",
        escape_html(&card.category_label)
    ));
    if let Some(tags) = &card.tags {
        html.push_str(&format!("<span class=\"tags\">{}</span>\n", escape_html(tags)));
    }
    html.push_str("<div class=\"answer\">\n");
    for block in &card.answer {
        match block {
            AnswerBlock::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>\n", escape_html(text)));
            }
            AnswerBlock::Code(code) => {
                html.push_str(&format!("<pre><code>{}</code></pre>\n", escape_html(code)));
            }
        }
    }
    html.push_str("</div>\n</article>\n");
    html
}

/// Escape `& < > " '` and nothing else.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Split an answer into prose paragraphs and fenced code blocks.
///
/// With fences, even segments are prose (blank lines dropped) and odd
/// segments are verbatim code. Without fences, every line is a paragraph,
/// blank lines included.
pub fn format_answer(answer: &str) -> Vec<AnswerBlock> {
    if !answer.contains(CODE_FENCE) {
        return answer
            .split('\n')
            .map(|line| AnswerBlock::Paragraph(line.to_string()))
            .collect();
    }

    answer
        .split(CODE_FENCE)
        .enumerate()
        .flat_map(|(index, segment)| {
            if index % 2 == 1 {
                vec![AnswerBlock::Code(segment.to_string())]
            } else {
                segment
                    .split('\n')
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| AnswerBlock::Paragraph(line.to_string()))
                    .collect()
            }
        })
        .collect()
}

/// Build the category selector controls, "All" first.
pub fn category_controls(
    categories: &[String],
    active: Option<&str>,
    rule: HighlightRule,
) -> Vec<CategoryControl> {
    std::iter::once(None)
        .chain(categories.iter().map(|c| Some(c.as_str())))
        .map(|value| {
            let label = value.map(display_label).unwrap_or(ALL_LABEL);
            CategoryControl {
                value: value.map(str::to_string),
                label: label.to_string(),
                active: is_active(rule, value, label, active),
            }
        })
        .collect()
}

fn is_active(rule: HighlightRule, value: Option<&str>, label: &str, active: Option<&str>) -> bool {
    match rule {
        HighlightRule::ByValue => value == active,
        HighlightRule::ByLabel => match active {
            Some(active) => label == active,
            None => label == UNCATEGORIZED,
        },
    }
}

/// Build a full frame from the filtered cards and the current state.
pub fn render(filtered: &[Card], state: &UiState, drawer: DrawerState, rule: HighlightRule) -> RenderFrame {
    let frame = RenderFrame {
        status: BootStatus::Ready,
        cards: filtered.iter().map(RenderedCard::from_card).collect(),
        shown: filtered.len(),
        total: state.all_cards.len(),
        categories: category_controls(&state.categories, state.active_category.as_deref(), rule),
        search_input: state.search_input.clone(),
        drawer_open: drawer == DrawerState::Open,
    };

    tracing::debug!(
        shown = frame.shown,
        total = frame.total,
        active = ?state.active_category,
        "Rendered catalog frame"
    );

    frame
}
