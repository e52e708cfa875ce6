use crate::core::Verbosity;
use anyhow::Result;

/// マスクの値と構成レベルを表示用に整形
pub fn describe_mask(mask: Verbosity) -> Vec<String> {
    let mut lines = vec![
        format!("hex:     {mask}"),
        format!("decimal: {}", mask.bits()),
    ];

    if let Some(name) = mask.name() {
        lines.push(format!("name:    {name}"));
    }

    let names = mask.names();
    if names.is_empty() {
        lines.push("levels:  (none)".to_string());
    } else {
        lines.push(format!("levels:  {}", names.join(" | ")));
    }

    let unnamed = mask.unnamed_bits();
    if unnamed != 0 {
        lines.push(format!("unnamed: {unnamed:#010x}"));
    }

    lines
}

/// Parse a mask expression and print its breakdown
pub fn execute_mask(expression: &str) -> Result<()> {
    let mask: Verbosity = expression.parse()?;

    println!("🔍 マスク式: {expression}");
    for line in describe_mask(mask) {
        println!("   {line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_named_mask() {
        let lines = describe_mask(Verbosity::CRITICAL_S);

        assert_eq!(lines[0], "hex:     0x00000006");
        assert_eq!(lines[1], "decimal: 6");
        assert_eq!(lines[2], "name:    CRITICAL_S");
        assert_eq!(lines[3], "levels:  CRITICAL | SILENT");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_describe_off_and_unnamed() {
        let off = describe_mask(Verbosity::OFF);
        assert!(off.contains(&"levels:  (none)".to_string()));

        let odd = describe_mask(Verbosity::ERROR | Verbosity::from_bits(1));
        assert!(odd.iter().any(|l| l == "unnamed: 0x00000001"));
        assert!(!odd.iter().any(|l| l.starts_with("name:")));
    }

    #[test]
    fn test_execute_mask_rejects_bad_expression() {
        assert!(execute_mask("warning_s").is_ok());
        assert!(execute_mask("shouting").is_err());
    }
}
