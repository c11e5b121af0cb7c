use crate::error::Result;
use crate::status::DeviceStatus;

const FENCE: &str = "```";

/// Render a status as a fenced, pretty-printed JSON block for chat.
pub fn format_status(status: &DeviceStatus) -> Result<String> {
    let body = serde_json::to_string_pretty(status)?;
    Ok(format!("{FENCE}\n{body}\n{FENCE}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusReport;
    use chrono::TimeZone;

    #[test]
    fn formats_fenced_block_with_one_field_per_line() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let status = DeviceStatus::from_report(
            StatusReport {
                cpu: "10%".into(),
                disk: "5%".into(),
                memory: "60%".into(),
                boot_time: "2024-01-01".into(),
            },
            at,
        );
        let text = format_status(&status).unwrap();

        assert!(text.starts_with("```\n{"));
        assert!(text.ends_with("}\n```"));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&r#"  "cpu": "10%","#));
        assert!(lines.contains(&r#"  "disk": "5%","#));
        assert!(lines.contains(&r#"  "memory": "60%","#));
        assert!(lines.contains(&r#"  "bootTime": "2024-01-01","#));
        assert!(lines.contains(&r#"  "timestamp": "2024-01-02T03:04:05Z""#));
    }

    #[test]
    fn formats_unset_status() {
        let text = format_status(&DeviceStatus::default()).unwrap();
        assert!(text.contains(r#""timestamp": null"#));
        assert!(text.contains(r#""cpu": """#));
    }
}
