//! Heuristic HTML extraction for the live-times page.
//!
//! The provider's markup has no stable ids, so rows and fields are located
//! by class-substring heuristics. The heuristics are captured in a
//! [`FieldContract`] mapping each field role to an ordered list of CSS
//! selectors, compiled once into [`FieldSelectors`]. The rest of the crate
//! never touches markup shape.

use scraper::{ElementRef, Html, Selector};

use crate::domain::{DEFAULT_PATTERN, DEFAULT_STOPS, RawDeparture};

use super::error::SourceError;

/// CSS selectors for each field role, in preference order.
///
/// Row selectors are tried in order until one yields rows; within a row,
/// each field takes the text of the first element its selectors find.
#[derive(Debug, Clone)]
pub struct FieldContract {
    /// Selects one element per departure row.
    pub row: Vec<String>,
    /// Platform identifier within a row.
    pub platform: Vec<String>,
    /// Destination within a row.
    pub destination: Vec<String>,
    /// Time display within a row.
    pub time: Vec<String>,
    /// Service pattern code within a row.
    pub pattern: Vec<String>,
    /// Stopping pattern description within a row.
    pub stops: Vec<String>,
}

impl Default for FieldContract {
    fn default() -> Self {
        fn any_class(names: &[&str]) -> Vec<String> {
            names
                .iter()
                .map(|name| format!("[class*=\"{name}\"]"))
                .collect()
        }

        Self {
            row: vec![
                r#"tr[class*="departure"], tr[class*="train"], tr[class*="service"]"#.into(),
                r#"div[class*="departure"], div[class*="train"], div[class*="service"]"#.into(),
            ],
            platform: any_class(&["platform", "plat"]),
            destination: any_class(&["destination", "dest"]),
            time: any_class(&["time", "depart", "due"]),
            pattern: any_class(&["pattern", "type"]),
            stops: any_class(&["stops", "via"]),
        }
    }
}

/// A [`FieldContract`] with its selectors compiled.
pub struct FieldSelectors {
    row: Vec<Selector>,
    platform: Vec<Selector>,
    destination: Vec<Selector>,
    time: Vec<Selector>,
    pattern: Vec<Selector>,
    stops: Vec<Selector>,
}

impl FieldSelectors {
    /// Compile a contract, rejecting invalid selectors.
    pub fn compile(contract: &FieldContract) -> Result<Self, SourceError> {
        Ok(Self {
            row: compile_all(&contract.row)?,
            platform: compile_all(&contract.platform)?,
            destination: compile_all(&contract.destination)?,
            time: compile_all(&contract.time)?,
            pattern: compile_all(&contract.pattern)?,
            stops: compile_all(&contract.stops)?,
        })
    }
}

fn compile_all(selectors: &[String]) -> Result<Vec<Selector>, SourceError> {
    selectors
        .iter()
        .map(|s| {
            Selector::parse(s).map_err(|_| SourceError::Selector {
                selector: s.clone(),
            })
        })
        .collect()
}

/// Extract raw departure records from a live-times HTML page.
///
/// Rows missing platform, destination, or time are skipped; pattern and
/// stops fall back to the documented defaults.
pub fn scrape_departures(html: &str, selectors: &FieldSelectors, line: &str) -> Vec<RawDeparture> {
    let document = Html::parse_document(html);

    let mut rows = Vec::new();
    for row_selector in &selectors.row {
        rows = document.select(row_selector).collect();
        if !rows.is_empty() {
            break;
        }
    }

    let mut raws = Vec::new();
    for row in rows {
        let platform = first_text(&row, &selectors.platform);
        let destination = first_text(&row, &selectors.destination);
        let time = first_text(&row, &selectors.time);

        let (Some(platform), Some(destination), Some(time_display)) = (platform, destination, time)
        else {
            tracing::debug!(line, "skipping row missing platform, destination, or time");
            continue;
        };

        raws.push(RawDeparture {
            platform,
            destination,
            time_display,
            pattern: first_text(&row, &selectors.pattern)
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            stops: first_text(&row, &selectors.stops).unwrap_or_else(|| DEFAULT_STOPS.to_string()),
            line: line.to_string(),
        });
    }

    raws
}

/// Trimmed text of the first element matched by any of `selectors`.
fn first_text(row: &ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    for selector in selectors {
        if let Some(element) = row.select(selector).next() {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_selectors() -> FieldSelectors {
        FieldSelectors::compile(&FieldContract::default()).unwrap()
    }

    #[test]
    fn extracts_table_rows() {
        let html = r#"
            <table>
              <tr class="departure-row">
                <td class="platform">1</td>
                <td class="destination">Perth</td>
                <td class="time">5 min</td>
                <td class="pattern">A</td>
                <td class="stops">All Stations</td>
              </tr>
              <tr class="departure-row">
                <td class="platform">2</td>
                <td class="destination">Armadale</td>
                <td class="time">12:05</td>
              </tr>
            </table>
        "#;

        let raws = scrape_departures(html, &default_selectors(), "Armadale");
        assert_eq!(raws.len(), 2);

        assert_eq!(raws[0].platform, "1");
        assert_eq!(raws[0].destination, "Perth");
        assert_eq!(raws[0].time_display, "5 min");
        assert_eq!(raws[0].pattern, "A");
        assert_eq!(raws[0].line, "Armadale");

        // Missing pattern/stops get the defaults.
        assert_eq!(raws[1].pattern, DEFAULT_PATTERN);
        assert_eq!(raws[1].stops, DEFAULT_STOPS);
    }

    #[test]
    fn falls_back_to_div_rows() {
        let html = r#"
            <div class="train-card">
              <span class="plat">2</span>
              <span class="dest">Thornlie</span>
              <span class="due-in">Now</span>
            </div>
        "#;

        let raws = scrape_departures(html, &default_selectors(), "Thornlie-Cockburn");
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].platform, "2");
        assert_eq!(raws[0].destination, "Thornlie");
        assert_eq!(raws[0].time_display, "Now");
    }

    #[test]
    fn skips_rows_missing_required_fields() {
        let html = r#"
            <table>
              <tr class="service">
                <td class="destination">Perth</td>
                <td class="time">5 min</td>
              </tr>
              <tr class="service">
                <td class="platform">1</td>
                <td class="destination">Perth</td>
                <td class="time">7 min</td>
              </tr>
            </table>
        "#;

        let raws = scrape_departures(html, &default_selectors(), "Armadale");
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].time_display, "7 min");
    }

    #[test]
    fn no_rows_yields_empty() {
        let html = "<html><body><p>maintenance page</p></body></html>";
        assert!(scrape_departures(html, &default_selectors(), "Armadale").is_empty());
    }

    #[test]
    fn first_matching_role_selector_wins() {
        // Both "time" and "due" classes present; "time" is listed first.
        let html = r#"
            <table>
              <tr class="departure">
                <td class="platform">1</td>
                <td class="destination">Perth</td>
                <td class="time">3 min</td>
                <td class="due">9 min</td>
              </tr>
            </table>
        "#;

        let raws = scrape_departures(html, &default_selectors(), "Armadale");
        assert_eq!(raws[0].time_display, "3 min");
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let contract = FieldContract {
            row: vec!["tr[[".into()],
            ..FieldContract::default()
        };
        assert!(matches!(
            FieldSelectors::compile(&contract),
            Err(SourceError::Selector { .. })
        ));
    }
}
