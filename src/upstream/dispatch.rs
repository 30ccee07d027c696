//! Maps abstract search requests onto concrete upstream API calls.
//!
//! The client only knows four request kinds. Each one corresponds to a fixed
//! endpoint and JSON body shape of the legal-data API; anything else is
//! rejected here, before a token is fetched or any network call is made.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::utils::http_helpers::ProxyError;

/// The abstract request the client POSTs to the gateway.
///
/// Exactly one payload field matters, selected by `type`; the others are
/// ignored when present.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub keyword: Option<String>,
    pub article_number: Option<String>,
    pub code_id: Option<String>,
    pub text_id: Option<String>,
}

/// One concrete call against the upstream API.
#[derive(Debug, PartialEq)]
pub struct UpstreamCall {
    pub path: &'static str,
    pub body: Value,
}

/// Builds the `/search` body shared by keyword and article lookups.
fn search_body(type_champ: &str, type_recherche: &str, valeur: &str, fond: &str) -> Value {
    json!({
        "recherche": {
            "champs": [{
                "typeChamp": type_champ,
                "criteres": [{
                    "typeRecherche": type_recherche,
                    "valeur": valeur,
                }],
            }],
            "pageNumber": 1,
            "pageSize": 20,
            "sort": "PERTINENCE",
            "operateur": "ET",
        },
        "fond": fond,
    })
}

/// Builds the text-retrieval call directly, for callers that already hold an
/// article id rather than an abstract request.
pub fn text_call(text_id: &str) -> UpstreamCall {
    UpstreamCall {
        path: "/consult/getArticle",
        body: json!({ "id": text_id }),
    }
}

fn require<'a>(field: Option<&'a String>, name: &str, kind: &str) -> Result<&'a str, ProxyError> {
    field.map(|s| s.as_str()).ok_or_else(|| {
        ProxyError::Validation(format!(
            "Missing '{}' for request type '{}'",
            name, kind
        ))
    })
}

/// Resolves a request to its upstream endpoint and body.
///
/// The table is exhaustive; an unknown `type` is a validation error.
pub fn dispatch(request: &SearchRequest) -> Result<UpstreamCall, ProxyError> {
    match request.kind.as_str() {
        "keyword" => {
            let keyword = require(request.keyword.as_ref(), "keyword", "keyword")?;
            Ok(UpstreamCall {
                path: "/search",
                body: search_body("ALL", "UN_DES_MOTS", keyword, "GLOBAL"),
            })
        }
        "article" => {
            let number = require(request.article_number.as_ref(), "articleNumber", "article")?;
            Ok(UpstreamCall {
                path: "/search",
                body: search_body("ARTICLE", "EXACTE", number, "CODE_DATE"),
            })
        }
        "code" => {
            let code_id = require(request.code_id.as_ref(), "codeId", "code")?;
            Ok(UpstreamCall {
                path: "/consult/code",
                body: json!({ "id": code_id }),
            })
        }
        "text" => {
            let text_id = require(request.text_id.as_ref(), "textId", "text")?;
            Ok(text_call(text_id))
        }
        other => Err(ProxyError::Validation(format!(
            "Invalid request type '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: &str) -> SearchRequest {
        SearchRequest {
            kind: kind.to_string(),
            keyword: None,
            article_number: None,
            code_id: None,
            text_id: None,
        }
    }

    /// Test the keyword request shape against the upstream search contract.
    #[test]
    fn test_keyword_dispatch() {
        let mut req = request("keyword");
        req.keyword = Some("handicap".to_string());
        let call = dispatch(&req).unwrap();
        assert_eq!(call.path, "/search");
        assert_eq!(
            call.body,
            json!({
                "recherche": {
                    "champs": [{
                        "typeChamp": "ALL",
                        "criteres": [{
                            "typeRecherche": "UN_DES_MOTS",
                            "valeur": "handicap",
                        }],
                    }],
                    "pageNumber": 1,
                    "pageSize": 20,
                    "sort": "PERTINENCE",
                    "operateur": "ET",
                },
                "fond": "GLOBAL",
            })
        );
    }

    /// Test that an article lookup switches to an exact search over the
    /// ARTICLE field against the dated-codes collection.
    #[test]
    fn test_article_dispatch() {
        let mut req = request("article");
        req.article_number = Some("L1111-1".to_string());
        let call = dispatch(&req).unwrap();
        assert_eq!(call.path, "/search");
        assert_eq!(call.body["fond"], "CODE_DATE");
        let champ = &call.body["recherche"]["champs"][0];
        assert_eq!(champ["typeChamp"], "ARTICLE");
        assert_eq!(champ["criteres"][0]["typeRecherche"], "EXACTE");
        assert_eq!(champ["criteres"][0]["valeur"], "L1111-1");
    }

    /// Test the code-structure consultation shape.
    #[test]
    fn test_code_dispatch() {
        let mut req = request("code");
        req.code_id = Some("LEGITEXT000006074069".to_string());
        let call = dispatch(&req).unwrap();
        assert_eq!(call.path, "/consult/code");
        assert_eq!(call.body, json!({ "id": "LEGITEXT000006074069" }));
    }

    /// Test the article-text retrieval shape.
    #[test]
    fn test_text_dispatch() {
        let mut req = request("text");
        req.text_id = Some("LEGIARTI000006420564".to_string());
        let call = dispatch(&req).unwrap();
        assert_eq!(call.path, "/consult/getArticle");
        assert_eq!(call.body, json!({ "id": "LEGIARTI000006420564" }));
    }

    /// Test that an unknown type is refused outright.
    #[test]
    fn test_unknown_type_is_rejected() {
        let req = request("jurisprudence");
        let err = dispatch(&req).unwrap_err();
        assert!(matches!(err, ProxyError::Validation(_)));
    }

    /// Test that the payload field matching the type must be present, while
    /// non-matching fields are ignored.
    #[test]
    fn test_payload_field_must_match_type() {
        let mut req = request("keyword");
        req.text_id = Some("LEGIARTI000006420564".to_string());
        let err = dispatch(&req).unwrap_err();
        assert!(matches!(err, ProxyError::Validation(_)));

        req.keyword = Some("accessibilité".to_string());
        let call = dispatch(&req).unwrap();
        assert_eq!(call.path, "/search");
    }
}
