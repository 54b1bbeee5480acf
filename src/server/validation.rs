//! Request body validation.
//!
//! Fields are reported under their API names (`URL`, `Operation`, `Title`, ...)
//! in declaration order, one error per field.

use crate::config::{
    AUTHOR_MAX_LEN, DESCRIPTION_MAX_LEN, GENRE_MAX_LEN, ISBN_MAX_LEN, MIN_BOOK_YEAR,
    TITLE_MAX_LEN,
};
use crate::normalize::{check_characters, Operation};
use crate::server::types::{FieldError, UrlProcessRequest};
use crate::storage::BookInput;

const REQUIRED: &str = "This field is required";

/// Validates a URL processing request.
pub fn validate_url_request(req: &UrlProcessRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if req.url.is_empty() {
        errors.push(FieldError::new("URL", REQUIRED));
    } else if check_characters(&req.url).is_err() || url::Url::parse(&req.url).is_err() {
        errors.push(FieldError::new("URL", "Must be a valid URL"));
    }

    if req.operation.is_empty() {
        errors.push(FieldError::new("Operation", REQUIRED));
    } else if req.operation.parse::<Operation>().is_err() {
        errors.push(FieldError::new(
            "Operation",
            format!("Must be one of: {}", Operation::literals()),
        ));
    }

    finish(errors)
}

/// Validates the body of a book create or update request.
pub fn validate_book_input(input: &BookInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_required_text(&mut errors, "Title", &input.title, TITLE_MAX_LEN);
    check_required_text(&mut errors, "Author", &input.author, AUTHOR_MAX_LEN);

    if input.year == 0 {
        errors.push(FieldError::new("Year", REQUIRED));
    } else if input.year < MIN_BOOK_YEAR {
        errors.push(FieldError::new(
            "Year",
            format!("Must be at least {MIN_BOOK_YEAR}"),
        ));
    }

    check_optional_text(
        &mut errors,
        "Description",
        input.description.as_deref(),
        DESCRIPTION_MAX_LEN,
    );
    check_optional_text(&mut errors, "ISBN", input.isbn.as_deref(), ISBN_MAX_LEN);
    check_optional_text(&mut errors, "Genre", input.genre.as_deref(), GENRE_MAX_LEN);

    finish(errors)
}

fn check_required_text(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.is_empty() {
        errors.push(FieldError::new(field, REQUIRED));
    } else if value.chars().count() > max {
        errors.push(too_long(field, max));
    }
}

fn check_optional_text(errors: &mut Vec<FieldError>, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.push(too_long(field, max));
        }
    }
}

fn too_long(field: &str, max: usize) -> FieldError {
    FieldError::new(field, format!("Must be no more than {max} characters"))
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_request(url: &str, operation: &str) -> UrlProcessRequest {
        UrlProcessRequest {
            url: url.to_string(),
            operation: operation.to_string(),
        }
    }

    fn valid_book() -> BookInput {
        BookInput {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_url_request() {
        assert!(validate_url_request(&url_request("https://example.com", "all")).is_ok());
    }

    #[test]
    fn test_url_request_missing_fields() {
        let errors = validate_url_request(&UrlProcessRequest::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("URL", "This field is required"),
                FieldError::new("Operation", "This field is required"),
            ]
        );
    }

    #[test]
    fn test_url_request_malformed_url() {
        let errors = validate_url_request(&url_request("not a url", "canonical")).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("URL", "Must be a valid URL")]);
    }

    #[test]
    fn test_url_request_rejects_characters_the_parser_would_strip() {
        for raw in [
            "https://exa\tmple.com/path",
            "https://example.com/a\n",
            " https://example.com",
        ] {
            let errors = validate_url_request(&url_request(raw, "canonical")).unwrap_err();
            assert_eq!(
                errors,
                vec![FieldError::new("URL", "Must be a valid URL")],
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_url_request_unknown_operation() {
        let errors =
            validate_url_request(&url_request("https://example.com", "shorten")).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new(
                "Operation",
                "Must be one of: canonical, redirection, all"
            )]
        );
    }

    #[test]
    fn test_valid_book() {
        assert!(validate_book_input(&valid_book()).is_ok());
    }

    #[test]
    fn test_book_missing_required_fields() {
        let errors = validate_book_input(&BookInput::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Title", "Author", "Year"]);
        assert!(errors.iter().all(|e| e.message == "This field is required"));
    }

    #[test]
    fn test_book_year_too_early() {
        let input = BookInput {
            year: 999,
            ..valid_book()
        };
        let errors = validate_book_input(&input).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("Year", "Must be at least 1000")]);
    }

    #[test]
    fn test_book_length_limits() {
        let input = BookInput {
            title: "t".repeat(256),
            isbn: Some("1".repeat(21)),
            genre: Some("g".repeat(100)),
            ..valid_book()
        };
        let errors = validate_book_input(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("Title", "Must be no more than 255 characters"),
                FieldError::new("ISBN", "Must be no more than 20 characters"),
            ]
        );
    }

    #[test]
    fn test_book_length_counts_characters_not_bytes() {
        let input = BookInput {
            title: "é".repeat(255),
            ..valid_book()
        };
        assert!(validate_book_input(&input).is_ok());
    }
}
