//! Category policy display formatting

use crate::models::{Category, Frequency, UserSettings};

/// Format the full category taxonomy with effective policies
pub fn format_policy_list(settings: &UserSettings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {:<10} {:<12} {:>10}  {}\n",
        "Category", "Label", "Frequency", "Per Year", "Source"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for category in Category::ALL {
        let policy = settings.policy_for(category);
        let count = match policy.frequency {
            Frequency::Irregular => policy.annual_count.to_string(),
            Frequency::Regular => "-".to_string(),
        };
        let source = if settings.has_override(category) {
            "custom"
        } else {
            "default"
        };

        output.push_str(&format!(
            "{:<16} {:<10} {:<12} {:>10}  {}\n",
            category.key(),
            category.label(),
            policy.frequency.label(),
            count,
            source
        ));
    }

    output
}
