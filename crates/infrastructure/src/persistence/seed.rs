//! Demo leads served when no data file exists yet

use domain::{Lead, LeadId, LeadStatus};

const DEMO_SUBMITTED_AT: &str = "02/02/2024, 2:45 PM";

struct DemoLead {
    first: &'static str,
    last: &'static str,
    visa: &'static str,
    info: &'static str,
    country: &'static str,
    resume: Option<&'static str>,
    status: LeadStatus,
}

const DEMO: [DemoLead; 8] = [
    DemoLead {
        first: "Jorge",
        last: "Ruiz",
        visa: "O-1",
        info: "Looking for visa assistance for tech role",
        country: "Mexico",
        resume: Some("/uploads/sample_jorge_resume.pdf"),
        status: LeadStatus::Pending,
    },
    DemoLead {
        first: "Bahar",
        last: "Zamir",
        visa: "H-1B",
        info: "Software engineer seeking visa sponsorship",
        country: "Mexico",
        resume: None,
        status: LeadStatus::Pending,
    },
    DemoLead {
        first: "Mary",
        last: "Lopez",
        visa: "EB-1",
        info: "Research scientist looking for permanent residency",
        country: "Brazil",
        resume: Some("/uploads/sample_mary_resume.pdf"),
        status: LeadStatus::Pending,
    },
    DemoLead {
        first: "Li",
        last: "Zijin",
        visa: "L-1",
        info: "Manager seeking intra-company transfer",
        country: "South Korea",
        resume: None,
        status: LeadStatus::Pending,
    },
    DemoLead {
        first: "Mark",
        last: "Antonov",
        visa: "O-1",
        info: "Artist seeking extraordinary ability visa",
        country: "Russia",
        resume: None,
        status: LeadStatus::Pending,
    },
    DemoLead {
        first: "Jane",
        last: "Ma",
        visa: "H-1B",
        info: "Data scientist looking for work authorization",
        country: "Mexico",
        resume: None,
        status: LeadStatus::Pending,
    },
    DemoLead {
        first: "Anand",
        last: "Jain",
        visa: "EB-2",
        info: "Senior developer seeking green card",
        country: "Mexico",
        resume: None,
        status: LeadStatus::ReachedOut,
    },
    DemoLead {
        first: "Anna",
        last: "Voronova",
        visa: "O-1",
        info: "Designer with extraordinary abilities",
        country: "France",
        resume: None,
        status: LeadStatus::Pending,
    },
];

/// The eight demo leads, with IDs "1" through "8"
#[must_use]
pub fn demo_leads() -> Vec<Lead> {
    DEMO.iter()
        .enumerate()
        .map(|(i, demo)| {
            let handle = format!("{}.{}", demo.first, demo.last).to_lowercase();
            Lead {
                id: LeadId::new((i + 1).to_string()),
                first_name: demo.first.to_string(),
                last_name: demo.last.to_string(),
                email: format!("{handle}@email.com"),
                linkedin: format!("https://linkedin.com/in/{}", handle.replace('.', "-")),
                visas_interested: vec![demo.visa.to_string()],
                resume_url: demo.resume.map(str::to_string),
                additional_info: demo.info.to_string(),
                status: demo.status,
                submitted_at: DEMO_SUBMITTED_AT.to_string(),
                country: demo.country.to_string(),
            }
        })
        .collect()
}
