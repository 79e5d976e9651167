use scraper::{ElementRef, Html, Selector};

mod types;

pub use types::{Field, Pick};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("selector {selector:?} matched nothing")]
    NoMatch { selector: String },
    #[error("selector {selector:?} matched {found} element(s), index {index} is out of range")]
    OutOfRange { selector: String, index: usize, found: usize },
    #[error("element matched by {selector:?} has no {attr:?} attribute")]
    MissingAttribute { selector: String, attr: String },
}

/// A compiled selector plus what to take from its matches.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    selector: Selector,
    pub pick: Pick,
    pub field: Field,
}

impl Query {
    pub fn new(selector: &str, pick: Pick, field: Field) -> Result<Self, QueryError> {
        let compiled = Selector::parse(selector).map_err(|e| QueryError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Query { raw: selector.to_string(), selector: compiled, pick, field })
    }

    pub fn selector(&self) -> &str {
        &self.raw
    }
}

/// Every match in document order; empty when nothing matches.
pub fn select_all<'a>(doc: &'a Html, query: &Query) -> Vec<ElementRef<'a>> {
    doc.select(&query.selector).collect()
}

pub fn select_one<'a>(doc: &'a Html, query: &Query) -> Option<ElementRef<'a>> {
    doc.select(&query.selector).next()
}

pub fn pick<'a>(doc: &'a Html, query: &Query) -> Result<ElementRef<'a>, QueryError> {
    match query.pick {
        Pick::First => select_one(doc, query).ok_or_else(|| QueryError::NoMatch { selector: query.raw.clone() }),
        Pick::Nth(index) => {
            let matches = select_all(doc, query);
            if matches.is_empty() {
                return Err(QueryError::NoMatch { selector: query.raw.clone() });
            }
            let found = matches.len();
            matches
                .into_iter()
                .nth(index)
                .ok_or_else(|| QueryError::OutOfRange { selector: query.raw.clone(), index, found })
        }
    }
}

pub fn read(el: ElementRef<'_>, query: &Query) -> Result<String, QueryError> {
    match &query.field {
        Field::Attr(name) => el.value().attr(name).map(|v| v.to_string()).ok_or_else(|| QueryError::MissingAttribute {
            selector: query.raw.clone(),
            attr: name.clone(),
        }),
        Field::Text => Ok(el.text().collect::<String>()),
        Field::Html => Ok(el.inner_html()),
    }
}

pub fn extract(doc: &Html, query: &Query) -> Result<String, QueryError> {
    let el = pick(doc, query)?;
    read(el, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = r#"<html><body><div class="book"><img src="cover.jpg"/></div></body></html>"#;

    const CHAPTER: &str = r#"
        <html><body>
          <div id="chapter-content">
            <p>First paragraph.</p>
            <p>Second paragraph.</p>
            <p>Third paragraph, with <em>emphasis</em> inside.</p>
            <p>Fourth paragraph.</p>
            <div><p>Nested, not a direct child.</p></div>
          </div>
        </body></html>
    "#;

    #[test]
    fn cover_src_is_read_from_first_match() {
        let doc = Html::parse_document(BOOK);
        let q = Query::new(".book > img", Pick::First, Field::Attr("src".into())).unwrap();
        assert_eq!(extract(&doc, &q).unwrap(), "cover.jpg");
    }

    #[test]
    fn repeated_extraction_is_deterministic() {
        let doc = Html::parse_document(BOOK);
        let q = Query::new(".book > img", Pick::First, Field::Attr("src".into())).unwrap();
        let values: Vec<String> = (0..5).map(|_| extract(&doc, &q).unwrap()).collect();
        assert!(values.iter().all(|v| v == "cover.jpg"));
    }

    #[test]
    fn third_paragraph_text_is_returned_unchanged() {
        let doc = Html::parse_document(CHAPTER);
        let q = Query::new("#chapter-content > p", Pick::Nth(2), Field::Text).unwrap();
        assert_eq!(extract(&doc, &q).unwrap(), "Third paragraph, with emphasis inside.");
        assert_eq!(select_all(&doc, &q).len(), 4);
    }

    #[test]
    fn no_match_is_empty_not_a_crash() {
        let doc = Html::parse_document(BOOK);
        let q = Query::new("#chapter-content > p", Pick::First, Field::Text).unwrap();
        assert!(select_all(&doc, &q).is_empty());
        assert!(select_one(&doc, &q).is_none());
        assert_eq!(extract(&doc, &q), Err(QueryError::NoMatch { selector: "#chapter-content > p".into() }));
    }

    #[test]
    fn index_past_the_end_reports_match_count() {
        let doc = Html::parse_document(CHAPTER);
        let q = Query::new("#chapter-content > p", Pick::Nth(9), Field::Text).unwrap();
        assert_eq!(
            extract(&doc, &q),
            Err(QueryError::OutOfRange { selector: "#chapter-content > p".into(), index: 9, found: 4 })
        );
    }

    #[test]
    fn missing_attribute_is_reported() {
        let doc = Html::parse_document(BOOK);
        let q = Query::new(".book > img", Pick::First, Field::Attr("alt".into())).unwrap();
        assert!(matches!(extract(&doc, &q), Err(QueryError::MissingAttribute { .. })));
    }

    #[test]
    fn inner_html_is_available() {
        let doc = Html::parse_document(CHAPTER);
        let q = Query::new("#chapter-content > p", Pick::Nth(2), Field::Html).unwrap();
        assert_eq!(extract(&doc, &q).unwrap(), "Third paragraph, with <em>emphasis</em> inside.");
    }

    #[test]
    fn bad_selector_is_rejected() {
        let err = Query::new("div >", Pick::First, Field::Text).unwrap_err();
        assert!(matches!(err, QueryError::InvalidSelector { .. }));
    }
}
