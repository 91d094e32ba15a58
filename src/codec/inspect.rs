use serde::Serialize;

use crate::account::Account;
use crate::codec::{decode, is_mnid};

/// What is known about a candidate string after checking its shape and,
/// when it looks like an MNID, decoding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub candidate: String,
    /// Shape check only, see [`is_mnid`]
    pub looks_like_mnid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    /// Decode failure for a string that passed the shape check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Inspection {
    pub fn is_valid(&self) -> bool {
        self.account.is_some()
    }

    /// Human readable one-line status
    pub fn status(&self) -> String {
        if !self.looks_like_mnid {
            return "it doesn't look like MNID".to_string();
        }
        match &self.error {
            Some(e) => format!("it looks like MNID but decoding fails: {e}"),
            None => "it looks like MNID".to_string(),
        }
    }
}

/// Checks the shape of `candidate` and decodes it when the shape fits.
/// Decode errors are captured in the result instead of being returned.
pub fn inspect(candidate: &str) -> Inspection {
    let looks_like_mnid = is_mnid(candidate);
    let (account, error) = if looks_like_mnid {
        match decode(candidate) {
            Ok(account) => (Some(account), None),
            Err(e) => (None, Some(e.to_string())),
        }
    } else {
        (None, None)
    };

    Inspection {
        candidate: candidate.to_string(),
        looks_like_mnid,
        account,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_valid() {
        let report = inspect("34ukSmiK1oA1C5Du8aWpkjFGALoH7nsHeDX");
        assert!(report.looks_like_mnid);
        assert!(report.is_valid());
        assert_eq!(report.account.as_ref().unwrap().network(), "0x2a");
        assert_eq!(report.status(), "it looks like MNID");
    }

    #[test]
    fn test_inspect_bad_checksum() {
        let report = inspect("2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkqU");
        assert!(report.looks_like_mnid);
        assert!(!report.is_valid());
        let error = report.error.as_deref().unwrap();
        assert!(error.starts_with("The checksum does not match the payload"));
        assert!(report.status().contains("decoding fails"));
    }

    #[test]
    fn test_inspect_not_mnid() {
        let report = inspect("QmXuNqXmrkxs4WhTDC2GCnXEep4LUD87bu97LQMn1rkxmQ");
        assert!(!report.looks_like_mnid);
        assert!(report.account.is_none());
        assert!(report.error.is_none());
        assert_eq!(report.status(), "it doesn't look like MNID");
    }

    #[test]
    fn test_inspection_json() {
        let report = inspect("2oDZvNUgn77w2BKTkd9qKpMeUo8EL94QL5V");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["looks_like_mnid"], true);
        assert_eq!(json["account"]["network"], "0x03");
        assert!(json.get("error").is_none());
    }
}
