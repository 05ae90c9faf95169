//! Plain-text rendering of a [`Report`].

use std::fmt::Write as _;

use feedback::{Report, Section, SectionView};

pub(crate) fn render_report(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Resume analysis ==");
    if let Some(role) = &report.target_role {
        let _ = writeln!(out, "Target role: {role}");
    }
    if let Some(at) = &report.uploaded_at {
        let _ = writeln!(out, "Uploaded:    {at}");
    }
    if let Some(url) = &report.blob_url {
        let _ = writeln!(out, "Stored at:   {url}");
    }
    if let Some(badge) = report.score {
        let _ = writeln!(out, "Score:       {} ({})", badge.label(), badge.tier.as_str());
    }
    if let Some(summary) = &report.summary {
        let _ = write!(out, "\nSummary\n  {summary}\n");
    }

    for section in [&report.strengths, &report.weaknesses] {
        write_list(&mut out, section);
    }
    write_chips(&mut out, &report.missing_keywords);
    write_list(&mut out, &report.suggestions);

    if let Some(raw) = &report.raw {
        let _ = write!(out, "\nUnstructured model output\n{raw}\n");
    }
    out
}

fn write_list(out: &mut String, section: &SectionView) {
    let _ = write!(out, "\n{}\n", section.title);
    match &section.body {
        Section::Items(items) => {
            for item in items {
                let _ = writeln!(out, "  - {item}");
            }
        }
        Section::Empty(message) => {
            let _ = writeln!(out, "  {message}");
        }
    }
}

fn write_chips(out: &mut String, section: &SectionView) {
    let _ = write!(out, "\n{}\n", section.title);
    match &section.body {
        Section::Items(keywords) => {
            let chips: Vec<String> = keywords.iter().map(|k| format!("[{k}]")).collect();
            let _ = writeln!(out, "  {}", chips.join(" "));
        }
        Section::Empty(message) => {
            let _ = writeln!(out, "  {message}");
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
