//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use methodfit_domain::Method;
use methodfit_engine::{display_order, Recommendation};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the catalog listing.
    pub fn format_methods(&self, methods: &[&'static Method]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_methods_json(methods),
            OutputFormat::Table => Ok(self.format_methods_table(methods, None)),
            OutputFormat::Quiet => Ok(Self::format_methods_quiet(methods)),
        }
    }

    /// Format an evaluation result.
    ///
    /// Recommended methods float to the top; the contraindication warning is
    /// appended when the flag is set.
    pub fn format_recommendation(&self, recommendation: &Recommendation) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_recommendation_json(recommendation),
            OutputFormat::Table => Ok(self.format_recommendation_table(recommendation)),
            OutputFormat::Quiet => Ok(recommendation
                .recommended
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the full detail card for one method.
    pub fn format_method_details(&self, method: &'static Method) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&method_json(method))?),
            OutputFormat::Quiet => Ok(method.id.to_string()),
            OutputFormat::Table => Ok(self.format_method_card(method)),
        }
    }

    fn format_methods_json(&self, methods: &[&'static Method]) -> Result<String> {
        let json_methods: Vec<serde_json::Value> =
            methods.iter().map(|m| method_json(m)).collect();
        Ok(serde_json::to_string_pretty(&json_methods)?)
    }

    fn format_methods_table(
        &self,
        methods: &[&'static Method],
        recommendation: Option<&Recommendation>,
    ) -> String {
        let mut builder = Builder::default();
        match recommendation {
            Some(_) => builder.push_record(["", "Id", "Name", "Hormones", "Frequency", "Typical use"]),
            None => builder.push_record(["Id", "Name", "Hormones", "Frequency", "Typical use"]),
        }

        for method in methods {
            let hormones = method.hormone_profile.as_str();
            match recommendation {
                Some(recommendation) => {
                    let marker = if recommendation.is_recommended(method.id) {
                        "\u{2713}"
                    } else {
                        ""
                    };
                    builder.push_record([
                        marker,
                        method.id.as_str(),
                        method.name,
                        hormones,
                        method.frequency,
                        method.efficacy_typical_use,
                    ]);
                }
                None => {
                    builder.push_record([
                        method.id.as_str(),
                        method.name,
                        hormones,
                        method.frequency,
                        method.efficacy_typical_use,
                    ]);
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn format_methods_quiet(methods: &[&'static Method]) -> String {
        let ids: Vec<String> = methods.iter().map(|m| m.id.to_string()).collect();
        ids.join("\n")
    }

    fn format_recommendation_table(&self, recommendation: &Recommendation) -> String {
        let ordered = display_order(recommendation);
        let mut output = self.format_methods_table(&ordered, Some(recommendation));

        if recommendation.recommended.is_empty() {
            output.push('\n');
            output.push_str(&self.warning("No method cleared the screening."));
        }
        if recommendation.estrogen_contraindicated {
            output.push('\n');
            output.push_str(&self.warning(
                "Estrogen-containing methods are contraindicated by your answers. \
                 Please discuss any hormonal option with a clinician.",
            ));
        }
        output
    }

    fn format_recommendation_json(&self, recommendation: &Recommendation) -> Result<String> {
        let recommended: Vec<String> = recommendation
            .recommended
            .iter()
            .map(|id| id.to_string())
            .collect();
        let ordered: Vec<String> = display_order(recommendation)
            .iter()
            .map(|m| m.id.to_string())
            .collect();

        let value = serde_json::json!({
            "recommended": recommended,
            "estrogenContraindicated": recommendation.estrogen_contraindicated,
            "displayOrder": ordered,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_method_card(&self, method: &'static Method) -> String {
        let mut card = String::new();
        card.push_str(&format!("{}\n", self.colorize(method.name, "cyan")));
        card.push_str(&format!("  Hormones:               {}\n", method.hormone_profile));
        card.push_str(&format!("  Frequency:              {}\n", method.frequency));
        card.push_str(&format!(
            "  Efficacy (perfect use): {}\n",
            method.efficacy_perfect_use
        ));
        card.push_str(&format!(
            "  Efficacy (typical use): {}\n",
            method.efficacy_typical_use
        ));
        card.push_str(&format!("  Mechanism:              {}\n", method.mechanism));
        if !method.notes.is_empty() {
            card.push_str(&format!("  Notes:                  {}\n", method.notes));
        }

        push_section(&mut card, "Pros", method.pros);
        push_section(&mut card, "Cons", method.cons);
        push_section(&mut card, "Should avoid if", method.should_avoid);
        push_section(&mut card, "Possible side effects", method.side_effects);
        push_section(&mut card, "Best for patients who", method.best_for);
        card
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("\u{2713} {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("\u{2717} {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("\u{2139} {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("\u{26a0} {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn push_section(card: &mut String, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    card.push_str(&format!("\n  {}\n", title));
    for item in items {
        card.push_str(&format!("    - {}\n", item));
    }
}

fn method_json(method: &Method) -> serde_json::Value {
    serde_json::json!({
        "id": method.id.to_string(),
        "name": method.name,
        "hormones": method.hormone_profile.as_str(),
        "tagline": method.tagline,
        "frequency": method.frequency,
        "mechanism": method.mechanism,
        "efficacy": {
            "perfectUse": method.efficacy_perfect_use,
            "typicalUse": method.efficacy_typical_use,
        },
        "pros": method.pros,
        "cons": method.cons,
        "shouldAvoid": method.should_avoid,
        "sideEffects": method.side_effects,
        "bestFor": method.best_for,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodfit_domain::{Answers, Catalog, MethodId};
    use methodfit_engine::Recommender;

    fn all_methods() -> Vec<&'static Method> {
        Catalog::iter().collect()
    }

    #[test]
    fn test_table_format_lists_every_method() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_methods(&all_methods()).unwrap();
        for id in MethodId::ALL {
            assert!(output.contains(id.as_str()));
        }
    }

    #[test]
    fn test_json_format_is_parseable() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_methods(&all_methods()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), Catalog::len());
    }

    #[test]
    fn test_quiet_format_is_ids_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_methods(&all_methods()).unwrap();
        assert_eq!(output.lines().count(), Catalog::len());
        assert!(!output.contains("Vaginal"));
    }

    #[test]
    fn test_recommendation_table_carries_contraindication_warning() {
        let formatter = Formatter::new(OutputFormat::Table, false);

        let clear = Recommender::canonical().recommend(&Answers::new());
        let output = formatter.format_recommendation(&clear).unwrap();
        assert!(!output.contains("contraindicated"));

        let mut answers = Answers::new();
        answers.record(
            methodfit_domain::QuestionId::ClottingHistory,
            methodfit_domain::AnswerValue::YesNo(methodfit_domain::YesNo::Yes),
        );
        let flagged = Recommender::canonical().recommend(&answers);
        let output = formatter.format_recommendation(&flagged).unwrap();
        assert!(output.contains("contraindicated"));
    }

    #[test]
    fn test_recommendation_json_shape() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let recommendation = Recommender::canonical().recommend(&Answers::new());
        let output = formatter.format_recommendation(&recommendation).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["recommended"].as_array().unwrap().len(), 7);
        assert_eq!(parsed["estrogenContraindicated"], false);
    }

    #[test]
    fn test_method_card_sections() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let card = formatter
            .format_method_details(Catalog::get(MethodId::Diaphragm))
            .unwrap();
        assert!(card.contains("Vaginal Diaphragm"));
        assert!(card.contains("Should avoid if"));
        assert!(card.contains("Best for patients who"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "\u{2713} test");
    }
}
