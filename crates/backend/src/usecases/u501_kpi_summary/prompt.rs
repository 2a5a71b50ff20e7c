use contracts::usecases::u501_kpi_summary::KpiSummaryRequest;

const SYSTEM_PROMPT: &str = "You are a senior executive business analyst.";

/// Системное сообщение и пользовательский промпт для обзора KPI
pub fn build_prompt(request: &KpiSummaryRequest) -> Result<(String, String), serde_json::Error> {
    let data = serde_json::to_string(&request.kpis)?;

    let prompt = format!(
        "Review the following KPI data for our dashboard.\n\
         \n\
         Data:\n\
         {data}\n\
         \n\
         Provide a brief, high-level executive summary (max 150 words).\n\
         Highlight top performers and areas requiring immediate attention.\n\
         Use a professional, encouraging, yet direct tone.\n\
         Format with clear bullet points for readability using Markdown."
    );

    Ok((SYSTEM_PROMPT.to_string(), prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_kpi::default_seed;

    #[test]
    fn test_prompt_embeds_kpi_data() {
        let request = KpiSummaryRequest::from_kpis(&default_seed());
        let (system, prompt) = build_prompt(&request).unwrap();
        assert!(system.contains("business analyst"));
        assert!(prompt.contains("\"name\":\"Q3 Revenue\""));
        assert!(prompt.contains("\"performance\":\"85.0%\""));
        assert!(prompt.contains("max 150 words"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn test_prompt_for_empty_collection() {
        let (_, prompt) = build_prompt(&KpiSummaryRequest::default()).unwrap();
        assert!(prompt.contains("Data:\n[]"));
    }
}
