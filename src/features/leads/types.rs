use serde::Serialize;

pub const LEAD_SUCCESS_MESSAGE: &str = "Success! Check your email for the free guide.";
pub const LEAD_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LeadRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LeadRequest {
    /// Builds a request from raw form values. A blank name is sent as absent.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the email is missing or malformed.
    pub fn from_input(email: &str, name: &str) -> Result<Self, String> {
        let email = email.trim();
        if email.is_empty() {
            return Err("Email is required.".to_string());
        }
        if !email.contains('@') {
            return Err("Email address looks invalid.".to_string());
        }
        let name = name.trim();
        Ok(Self {
            email: email.to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LeadRequest;

    #[test]
    fn blank_name_is_omitted() {
        let request = LeadRequest::from_input(" trader@example.com ", "   ").expect("lead");
        assert_eq!(request.email, "trader@example.com");
        assert_eq!(request.name, None);
        assert_eq!(
            serde_json::to_string(&request).expect("json"),
            r#"{"email":"trader@example.com"}"#
        );
    }

    #[test]
    fn name_is_trimmed_and_sent() {
        let request = LeadRequest::from_input("t@e.co", " Sam ").expect("lead");
        assert_eq!(request.name.as_deref(), Some("Sam"));
    }

    #[test]
    fn email_is_required() {
        assert!(LeadRequest::from_input("", "Sam").is_err());
        assert!(LeadRequest::from_input("no-at-sign", "").is_err());
    }
}
