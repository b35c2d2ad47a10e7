use crate::domain::model::{BlockReason, Page, SubmitOutcome};
use crate::utils::error::{EnhanceError, Result};
use crate::utils::validation::{parse_price, ParsedPrice};

/// Intercepts form submission and enforces the positive-price rule before
/// the host is allowed to navigate away. Validation runs only at submit
/// time; there is no re-validation on input change and no retry.
#[derive(Debug, Clone)]
pub struct SubmitGuard {
    price_field_id: String,
}

impl SubmitGuard {
    /// Installed iff the page has a form element at ready-time. A page
    /// without a form gets no guard; that is not an error.
    pub fn install(page: &Page, price_field_id: &str) -> Option<Self> {
        page.first_tag("form")?;
        tracing::debug!("Submit guard installed (price field: #{})", price_field_id);
        Some(Self {
            price_field_id: price_field_id.to_string(),
        })
    }

    /// Validates one submit attempt. A missing price field while the form
    /// exists is a fault, not a validation failure, and propagates as an
    /// error.
    pub fn check(&self, page: &Page) -> Result<SubmitOutcome> {
        let field = page
            .by_id(&self.price_field_id)
            .ok_or_else(|| EnhanceError::MissingElementError {
                id: self.price_field_id.clone(),
            })?;
        let raw = field.value.as_deref().unwrap_or("");

        let outcome = match parse_price(raw) {
            ParsedPrice::Number(value) if value > 0.0 => SubmitOutcome::Proceed,
            ParsedPrice::Number(value) => SubmitOutcome::Blocked {
                reason: BlockReason::NonPositive { value },
            },
            ParsedPrice::Empty => SubmitOutcome::Blocked {
                reason: BlockReason::Empty,
            },
            ParsedPrice::NotANumber => SubmitOutcome::Blocked {
                reason: BlockReason::NotANumber {
                    raw: raw.to_string(),
                },
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Element;

    fn form_page(price: Option<&str>) -> Page {
        let mut input = Element::new("input").with_id("price");
        if let Some(price) = price {
            input = input.with_value(price);
        }
        Page::new(vec![Element::new("form"), input])
    }

    #[test]
    fn test_install_requires_a_form() {
        let no_form = Page::new(vec![Element::new("div").with_class("lesson-card")]);
        assert!(SubmitGuard::install(&no_form, "price").is_none());
        assert!(SubmitGuard::install(&form_page(None), "price").is_some());
    }

    #[test]
    fn test_positive_price_proceeds() {
        let page = form_page(Some("10"));
        let guard = SubmitGuard::install(&page, "price").unwrap();
        assert_eq!(guard.check(&page).unwrap(), SubmitOutcome::Proceed);
    }

    #[test]
    fn test_zero_and_negative_prices_block() {
        for raw in ["0", "-5", "-0.0"] {
            let page = form_page(Some(raw));
            let guard = SubmitGuard::install(&page, "price").unwrap();
            let outcome = guard.check(&page).unwrap();
            match outcome {
                SubmitOutcome::Blocked {
                    reason: reason @ BlockReason::NonPositive { .. },
                } => {
                    assert_eq!(reason.message(), "Цена должна быть положительной!");
                }
                other => panic!("price {:?} should block as non-positive, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_empty_and_non_numeric_prices_block() {
        let page = form_page(Some(""));
        let guard = SubmitGuard::install(&page, "price").unwrap();
        assert_eq!(
            guard.check(&page).unwrap(),
            SubmitOutcome::Blocked {
                reason: BlockReason::Empty
            }
        );

        // An input that never got a value reads as empty too.
        let page = form_page(None);
        assert_eq!(
            guard.check(&page).unwrap(),
            SubmitOutcome::Blocked {
                reason: BlockReason::Empty
            }
        );

        let page = form_page(Some("abc"));
        assert_eq!(
            guard.check(&page).unwrap(),
            SubmitOutcome::Blocked {
                reason: BlockReason::NotANumber {
                    raw: "abc".to_string()
                }
            }
        );
    }

    #[test]
    fn test_missing_price_field_is_a_fault() {
        let page = Page::new(vec![Element::new("form")]);
        let guard = SubmitGuard::install(&page, "price").unwrap();
        let err = guard.check(&page).unwrap_err();
        assert!(matches!(
            err,
            EnhanceError::MissingElementError { ref id } if id == "price"
        ));
    }
}
