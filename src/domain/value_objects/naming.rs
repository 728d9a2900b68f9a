//! Naming conventions shared by the deployer and the aggregator
//!
//! These strings are relied upon by already-deployed stacks and buckets, so the
//! formats here must not drift.

use std::fmt;

/// Suffix appended to the title-cased alias for stack names and object keys
pub const POLICY_STACK_SUFFIX: &str = "-Policies";

/// Title-case an alias: every letter that starts a word is upper-cased.
///
/// ASCII letters, digits and `_` continue a word; any other ASCII character
/// separates words. Non-ASCII letters and digits continue a word, non-ASCII
/// whitespace separates. The rest of each word is left untouched.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_separates = true;
    for c in input.chars() {
        if prev_separates {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_separates = is_word_separator(c);
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

/// Name of an account's policy stack, also used as its template object key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyStackName(String);

impl PolicyStackName {
    pub fn for_alias(alias: &str) -> Self {
        Self(format!("{}{}", title_case(alias), POLICY_STACK_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object-store key for the stack's template
    pub fn template_key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyStackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ARN of the role assumed inside a member account
pub fn access_role_arn(account_id: &str, role_name: &str) -> String {
    format!("arn:aws:iam::{}:role/{}", account_id, role_name)
}

/// Public URL of an uploaded template
pub fn template_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3-{}.amazonaws.com/{}", bucket, region, key)
}

/// Fresh unique change set name
pub fn change_set_name() -> String {
    format!("cs-{}", uuid::Uuid::new_v4())
}
