use super::super::domain::BudgetFit;

const JUSTIFY_ROI_PCT: f64 = 200.0;
const JUSTIFY_COMPLIANCE_PCT: f64 = 80.0;
const JUSTIFY_INTEGRATION_PCT: f64 = 70.0;

const PRO_ROI_PCT: f64 = 150.0;
const CON_ROI_PCT: f64 = 100.0;
const PRO_COMPLIANCE_PCT: f64 = 80.0;
const CON_COMPLIANCE_PCT: f64 = 60.0;
const PRO_INTEGRATION_PCT: f64 = 80.0;
const CON_INTEGRATION_PCT: f64 = 50.0;

const COMPLIANCE_PRO: &str = "Meets most required compliance certifications";
const INTEGRATION_PRO: &str = "Strong coverage of your existing tools";
const INTEGRATION_CON: &str = "Limited support for your current integrations";
const OVER_BUDGET_CON: &str = "Projected cost exceeds the stated budget";
const FALLBACK_PRO: &str = "Balanced capabilities across evaluated criteria";
const FALLBACK_CON: &str = "No significant gaps identified for the stated requirements";

/// Raw component values the narrative rules look at.
pub(crate) struct RuleSignals {
    pub one_year_roi_pct: f64,
    pub compliance_pct: f64,
    pub integration_pct: f64,
    pub budget_fit: BudgetFit,
}

pub(crate) fn justification(
    platform_name: &str,
    total_score: f64,
    signals: &RuleSignals,
) -> String {
    let mut sentences = vec![format!("{platform_name} scores {total_score:.1}/100.")];

    if signals.one_year_roi_pct > JUSTIFY_ROI_PCT {
        sentences.push(format!("Strong ROI at {:.0}%.", signals.one_year_roi_pct));
    }
    if signals.compliance_pct > JUSTIFY_COMPLIANCE_PCT {
        sentences.push(format!(
            "Excellent compliance coverage ({:.0}%).",
            signals.compliance_pct
        ));
    }
    if signals.integration_pct > JUSTIFY_INTEGRATION_PCT {
        sentences.push("Robust integration support.".to_string());
    }

    sentences.join(" ")
}

pub(crate) fn pros_and_cons(signals: &RuleSignals) -> (Vec<String>, Vec<String>) {
    let mut pros = Vec::new();
    let mut cons = Vec::new();

    if signals.one_year_roi_pct > PRO_ROI_PCT {
        pros.push(format!(
            "High projected ROI ({:.0}% in year one)",
            signals.one_year_roi_pct
        ));
    } else if signals.one_year_roi_pct < CON_ROI_PCT {
        cons.push(format!(
            "Modest projected ROI ({:.0}% in year one)",
            signals.one_year_roi_pct
        ));
    }

    if signals.compliance_pct > PRO_COMPLIANCE_PCT {
        pros.push(COMPLIANCE_PRO.to_string());
    } else if signals.compliance_pct < CON_COMPLIANCE_PCT {
        cons.push(format!(
            "Certified for only {:.0}% of required standards",
            signals.compliance_pct
        ));
    }

    if signals.integration_pct > PRO_INTEGRATION_PCT {
        pros.push(INTEGRATION_PRO.to_string());
    } else if signals.integration_pct < CON_INTEGRATION_PCT {
        cons.push(INTEGRATION_CON.to_string());
    }

    if signals.budget_fit == BudgetFit::Exceeds {
        cons.push(OVER_BUDGET_CON.to_string());
    }

    if pros.is_empty() {
        pros.push(FALLBACK_PRO.to_string());
    }
    if cons.is_empty() {
        cons.push(FALLBACK_CON.to_string());
    }

    (pros, cons)
}
