//! Markup schemas for the contribution calendar.
//!
//! A schema answers two questions for each calendar day node: "which date is
//! this?" and "how many contributions?". Everything downstream of the parser
//! only sees `(date, count)` pairs, so supporting a differently structured
//! calendar means adding a schema here and nothing else.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::SchemaKind;

static DAY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| css(".ContributionCalendar-day"));
static TOOLTIP_SELECTOR: LazyLock<Selector> = LazyLock::new(|| css("tool-tip"));
static CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| css(".js-yearly-contributions"));

fn css(selector: &'static str) -> Selector {
    Selector::parse(selector).expect("static CSS selector")
}

/// Per-node extraction capability.
///
/// Implementations return raw tokens; validating them (ISO date, numeric count)
/// is the parser's job so every schema gets the same error semantics.
pub trait CalendarSchema {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Selector matching one element per calendar day.
    fn day_selector(&self) -> &Selector;

    /// The node's date token, if present.
    fn extract_date(&self, node: ElementRef<'_>) -> Option<String>;

    /// The node's count token, if present. `document` is the whole page, for
    /// schemas that keep the count outside the cell itself.
    fn extract_count(&self, node: ElementRef<'_>, document: &Html) -> Option<String>;
}

/// Cells carrying both `data-date` and `data-count` attributes.
///
/// GitHub omits `data-count` on empty days in some renderings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataCountSchema;

impl CalendarSchema for DataCountSchema {
    fn name(&self) -> &'static str {
        "data-count"
    }

    fn day_selector(&self) -> &Selector {
        &DAY_SELECTOR
    }

    fn extract_date(&self, node: ElementRef<'_>) -> Option<String> {
        data_date(node)
    }

    fn extract_count(&self, node: ElementRef<'_>, _document: &Html) -> Option<String> {
        node.value().attr("data-count").map(|v| v.trim().to_string())
    }
}

/// Table cells with `data-date`, counts in a `<tool-tip for="<cell id>">` element.
///
/// The tooltip reads "3 contributions on January 1st." or
/// "No contributions on January 1st."; the leading token is the count.
#[derive(Debug, Clone, Copy, Default)]
pub struct TooltipSchema;

impl CalendarSchema for TooltipSchema {
    fn name(&self) -> &'static str {
        "tooltip"
    }

    fn day_selector(&self) -> &Selector {
        &DAY_SELECTOR
    }

    fn extract_date(&self, node: ElementRef<'_>) -> Option<String> {
        data_date(node)
    }

    fn extract_count(&self, node: ElementRef<'_>, document: &Html) -> Option<String> {
        let id = node.value().id()?;
        let tooltip = document
            .select(&TOOLTIP_SELECTOR)
            .find(|t| t.value().attr("for") == Some(id))?;
        let text = tooltip.text().collect::<String>();
        let token = text.split_whitespace().next()?;
        if token.eq_ignore_ascii_case("no") {
            return Some("0".to_string());
        }
        // Thousands separators ("1,024 contributions").
        Some(token.replace(',', ""))
    }
}

fn data_date(node: ElementRef<'_>) -> Option<String> {
    node.value()
        .attr("data-date")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The part of the page holding the yearly calendar.
///
/// Profile pages wrap it in `.js-yearly-contributions`; day nodes outside that
/// container (activity previews) do not belong to the calendar. Pages without
/// the container are searched whole.
pub fn calendar_scope(document: &Html) -> ElementRef<'_> {
    document
        .select(&CONTAINER_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element())
}

/// Calendar day nodes in markup order, limited to [`calendar_scope`].
pub fn day_nodes<'a>(document: &'a Html, day_selector: &Selector) -> Vec<ElementRef<'a>> {
    calendar_scope(document).select(day_selector).collect()
}

/// Resolve a configured schema kind against a parsed document.
///
/// `Auto` looks only at the calendar scope: it prefers `data-count` attributes
/// when any day cell there has one and falls back to tooltips when the scope
/// carries `<tool-tip>` elements.
pub fn resolve(kind: SchemaKind, document: &Html) -> Box<dyn CalendarSchema> {
    match kind {
        SchemaKind::DataCount => Box::new(DataCountSchema),
        SchemaKind::Tooltip => Box::new(TooltipSchema),
        SchemaKind::Auto => {
            let scope = calendar_scope(document);
            let has_data_count = scope
                .select(&DAY_SELECTOR)
                .any(|n| n.value().attr("data-count").is_some());
            let has_tooltips = scope.select(&TOOLTIP_SELECTOR).next().is_some();
            if !has_data_count && has_tooltips {
                Box::new(TooltipSchema)
            } else {
                Box::new(DataCountSchema)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_day(document: &Html) -> ElementRef<'_> {
        document.select(&DAY_SELECTOR).next().unwrap()
    }

    #[test]
    fn data_count_reads_attributes() {
        let doc = Html::parse_document(
            r#"<svg><rect class="ContributionCalendar-day" data-date="2021-03-04" data-count="7"></rect></svg>"#,
        );
        let node = first_day(&doc);
        assert_eq!(DataCountSchema.extract_date(node).as_deref(), Some("2021-03-04"));
        assert_eq!(DataCountSchema.extract_count(node, &doc).as_deref(), Some("7"));
    }

    #[test]
    fn tooltip_reads_leading_token() {
        let doc = Html::parse_document(concat!(
            r#"<table><tbody><tr>"#,
            r#"<td id="d0" class="ContributionCalendar-day" data-date="2024-01-01"></td>"#,
            r#"<td id="d1" class="ContributionCalendar-day" data-date="2024-01-02"></td>"#,
            r#"<td id="d2" class="ContributionCalendar-day" data-date="2024-01-03"></td>"#,
            r#"</tr></tbody></table>"#,
            r#"<tool-tip for="d0">No contributions on January 1st.</tool-tip>"#,
            r#"<tool-tip for="d1">12 contributions on January 2nd.</tool-tip>"#,
            r#"<tool-tip for="d2">1,024 contributions on January 3rd.</tool-tip>"#,
        ));
        let counts: Vec<_> = doc
            .select(&DAY_SELECTOR)
            .map(|n| TooltipSchema.extract_count(n, &doc))
            .collect();
        assert_eq!(
            counts,
            vec![Some("0".to_string()), Some("12".to_string()), Some("1024".to_string())]
        );
    }

    #[test]
    fn tooltip_missing_for_cell_is_absent() {
        let doc = Html::parse_document(
            r#"<table><tbody><tr><td id="d0" class="ContributionCalendar-day" data-date="2024-01-01"></td></tr></tbody></table>"#,
        );
        assert_eq!(TooltipSchema.extract_count(first_day(&doc), &doc), None);
    }

    #[test]
    fn auto_prefers_data_count() {
        let legacy = Html::parse_document(
            r#"<svg><rect class="ContributionCalendar-day" data-date="2021-03-04" data-count="1"></rect></svg><tool-tip for="x">hi</tool-tip>"#,
        );
        assert_eq!(resolve(SchemaKind::Auto, &legacy).name(), "data-count");

        let modern = Html::parse_document(
            r#"<table><tbody><tr><td id="d0" class="ContributionCalendar-day" data-date="2024-01-01"></td></tr></tbody></table><tool-tip for="d0">No contributions</tool-tip>"#,
        );
        assert_eq!(resolve(SchemaKind::Auto, &modern).name(), "tooltip");
        assert_eq!(resolve(SchemaKind::DataCount, &modern).name(), "data-count");
    }

    #[test]
    fn auto_ignores_data_count_outside_the_calendar() {
        let doc = Html::parse_document(concat!(
            r#"<svg><rect class="ContributionCalendar-day" data-date="2020-06-01" data-count="1"></rect></svg>"#,
            r#"<div class="js-yearly-contributions"><table><tbody><tr>"#,
            r#"<td id="c0" class="ContributionCalendar-day" data-date="2024-02-28"></td>"#,
            r#"</tr></tbody></table>"#,
            r#"<tool-tip for="c0">7 contributions on February 28th.</tool-tip>"#,
            r#"</div>"#,
        ));
        assert_eq!(resolve(SchemaKind::Auto, &doc).name(), "tooltip");
        assert_eq!(day_nodes(&doc, &DAY_SELECTOR).len(), 1);
    }
}
