//! Plain-text dashboard for a finished analysis.

use std::fmt::Write;

use crate::models::{CareerAnalysis, RecommendedRole};

const BAR_WIDTH: usize = 20;

fn fit_bar(role: &RecommendedRole) -> String {
    match role.fit_score() {
        Some(score) => {
            let filled = usize::from(score) * BAR_WIDTH / 100;
            format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
        }
        None => format!("[{}]", " ".repeat(BAR_WIDTH)),
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

fn bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// Renders every section of the analysis in display order.
pub fn render_dashboard(analysis: &CareerAnalysis) -> String {
    let mut out = String::from("CAREER ANALYSIS\n===============\n");

    section(&mut out, "Recommended Roles");
    if analysis.recommended_roles.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (rank, role) in analysis.recommended_roles.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {} {}",
            rank + 1,
            role.role,
            fit_bar(role),
            role.fit_percentage
        );
        let _ = writeln!(out, "     {}", role.justification);
    }

    section(&mut out, "Current Skills");
    bullets(&mut out, &analysis.current_skills);

    section(&mut out, "Skills to Develop");
    bullets(&mut out, &analysis.missing_skills);

    section(&mut out, "Learning Roadmap");
    if analysis.learning_roadmap.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in &analysis.learning_roadmap {
        let _ = writeln!(out, "  {}: {}", item.week, item.focus);
        let _ = writeln!(out, "     Resources: {}", item.resources);
    }

    section(&mut out, "Portfolio Projects");
    bullets(&mut out, &analysis.portfolio_projects);

    section(&mut out, "Resume Improvements");
    bullets(&mut out, &analysis.resume_improvements);

    out
}
