//! Plain-text rendering of leads for the terminal

use std::io::{self, Write};

use application::LeadsPage;
use domain::{FormErrors, Lead};

/// Render one page of the leads table with its pager line
pub fn write_leads_page(out: &mut impl Write, page: &LeadsPage) -> io::Result<()> {
    if page.leads.is_empty() {
        writeln!(out, "No leads found.")?;
    } else {
        writeln!(
            out,
            "{:<38} {:<24} {:<12} {:<20} {}",
            "ID", "NAME", "STATUS", "SUBMITTED", "COUNTRY"
        )?;
        for lead in &page.leads {
            writeln!(
                out,
                "{:<38} {:<24} {:<12} {:<20} {}",
                lead.id.as_str(),
                truncate(&lead.full_name(), 24),
                lead.status.label(),
                lead.submitted_at,
                lead.country
            )?;
        }
    }

    writeln!(
        out,
        "Page {} of {} ({} matching)",
        page.page, page.total_pages, page.total_filtered
    )
}

/// Render every field of a lead
pub fn write_lead_detail(out: &mut impl Write, lead: &Lead) -> io::Result<()> {
    writeln!(out, "ID:           {}", lead.id)?;
    writeln!(out, "Name:         {}", lead.full_name())?;
    writeln!(out, "Email:        {}", lead.email)?;
    writeln!(out, "LinkedIn:     {}", lead.linkedin)?;
    writeln!(out, "Visas:        {}", lead.visas_interested.join(", "))?;
    if let Some(resume) = &lead.resume_url {
        writeln!(out, "Resume:       {resume}")?;
    }
    writeln!(out, "Country:      {}", lead.country)?;
    writeln!(out, "Status:       {}", lead.status.label())?;
    writeln!(out, "Submitted:    {}", lead.submitted_at)?;
    writeln!(out, "Additional information:")?;
    writeln!(out, "  {}", lead.additional_info)
}

/// Render form validation failures, one field per line
pub fn write_form_errors(out: &mut impl Write, errors: &FormErrors) -> io::Result<()> {
    writeln!(out, "Submission rejected ({} problems):", errors.len())?;
    for (field, message) in errors.iter() {
        writeln!(out, "  {field}: {message}")?;
    }
    Ok(())
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use domain::{LeadId, NewLead};

    use super::*;

    fn lead(first_name: &str) -> Lead {
        Lead::create(
            LeadId::new("1"),
            NewLead {
                first_name: first_name.to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                linkedin: "https://linkedin.com/in/jane".to_string(),
                visas_interested: vec!["O-1".to_string(), "EB-1".to_string()],
                resume_url: None,
                additional_info: "Needs help".to_string(),
                country: "Canada".to_string(),
            },
            "02/02/2024, 2:45 PM",
        )
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_page_says_so() {
        let page = LeadsPage {
            leads: Vec::new(),
            page: 1,
            total_pages: 1,
            total_filtered: 0,
            page_size: 8,
        };
        let text = render(|out| write_leads_page(out, &page));
        assert!(text.starts_with("No leads found."));
        assert!(text.contains("Page 1 of 1 (0 matching)"));
    }

    #[test]
    fn table_shows_name_and_status_label() {
        let page = LeadsPage {
            leads: vec![lead("Jane")],
            page: 1,
            total_pages: 1,
            total_filtered: 1,
            page_size: 8,
        };
        let text = render(|out| write_leads_page(out, &page));
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Pending"));
        assert!(text.contains("Canada"));
    }

    #[test]
    fn detail_joins_visas_and_skips_missing_resume() {
        let text = render(|out| write_lead_detail(out, &lead("Jane")));
        assert!(text.contains("Visas:        O-1, EB-1"));
        assert!(!text.contains("Resume:"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
