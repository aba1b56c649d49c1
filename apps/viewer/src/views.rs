//! Markup fragments injected into the hosting page.

use maud::{html, Markup, PreEscaped};
use question_core::{
    format_content, format_folder_name, option_letter, CatalogLayout, Folder, FolderCategory,
    OptionMark, Question,
};

pub const LOADING_QUESTIONS: &str = "Loading questions...";
pub const NO_QUESTIONS: &str = "No questions found";
pub const ERROR_LOADING_QUESTIONS: &str = "Error loading questions";
pub const NO_EXPLANATION: &str = "No explanation available";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Formatted question markup.
pub fn content(raw: &str) -> Markup {
    PreEscaped(format_content(raw))
}

pub fn folder_card(folder: &Folder) -> Markup {
    let label = format_folder_name(&folder.name);
    html! {
        div."folder-card" data-folder=(folder.name) {
            h4 title=(label) { (label) }
            div."question-count" { (folder.count) }
        }
    }
}

/// Catalog sections, one per non-empty subject.
pub fn folder_sections(categories: &[FolderCategory], layout: &CatalogLayout) -> Markup {
    let collapsible = layout.is_collapsible();
    html! {
        @for (index, category) in categories.iter().enumerate() {
            @let collapsed = layout.is_collapsed(index);
            div."folders-category" data-subject=(category.subject.title()) {
                h4 style=[collapsible.then_some("cursor: pointer")] {
                    i class=(format!("fas fa-{}", category.subject.icon())) {}
                    " " (category.subject.title())
                    @if collapsible {
                        span."category-toggle" {
                            @if collapsed { " (+)" } @else { " (-)" }
                        }
                    }
                }
                div."folders-grid" style=(if collapsed { "display: none" } else { "display: grid" }) {
                    @for folder in &category.folders {
                        (folder_card(folder))
                    }
                }
            }
        }
    }
}

/// Placeholder or status line inside the question list.
pub fn list_status(message: &str, is_error: bool) -> Markup {
    html! {
        div.question-list-status.error[is_error] { (message) }
    }
}

pub fn question_rows(ids: &[String]) -> Markup {
    if ids.is_empty() {
        return list_status(NO_QUESTIONS, false);
    }
    html! {
        @for id in ids {
            div."question-item" data-question-id=(id) {
                div."question-item-id" { (id) }
                div."question-item-select" { "Select" }
            }
        }
    }
}

fn option_class(mark: &OptionMark) -> String {
    let mut class = String::from("option");
    if mark.selected {
        class.push_str(" selected");
    }
    if mark.correct {
        class.push_str(" correct");
    }
    if mark.incorrect {
        class.push_str(" incorrect");
    }
    class
}

/// Answer options with their current reveal marks.
pub fn answer_options(question: &Question, marks: &[OptionMark]) -> Markup {
    html! {
        @for (index, option) in question.answer_options.iter().enumerate() {
            @let mark = marks.get(index).copied().unwrap_or_default();
            @let letter = option_letter(index);
            div class=(option_class(&mark))
                data-letter=(letter)
                data-correct=(question.is_key(&option.id).to_string()) {
                div."option-label" { (letter) }
                div."option-content" { (content(&option.content)) }
                @if mark.correct {
                    div."option-result" { i class="fas fa-check-circle" {} }
                } @else if mark.incorrect {
                    div."option-result" { i class="fas fa-times-circle" {} }
                }
            }
        }
    }
}

pub fn correct_answer(letters: &[String]) -> Markup {
    if letters.is_empty() {
        return html! { (NOT_SPECIFIED) };
    }
    html! {
        span."correct-marker" { i class="fas fa-check-circle" {} }
        " Option " (letters.join(", "))
    }
}

pub fn rationale(rationale: Option<&str>) -> Markup {
    match rationale {
        Some(r) => content(r),
        None => html! { p { (NO_EXPLANATION) } },
    }
}
