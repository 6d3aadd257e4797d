use crate::app::session::Reading;
use crate::core::engine::NumerologyReport;
use crate::core::recommendation::Recommendation;
use crate::domain::model::CellClass;

const CELL_WIDTH: usize = 9;

pub const COMBINATION_OFFER: &str = "Our team of numerology experts will advise you on your missing numbers \
and the matching combination of crystals in a bracelet made for you only, for maximum luck, \
harmony and stability in your life.";

/// Plain-text report for the terminal. Every line, the last included, ends with a newline.
pub fn render_reading(reading: &Reading) -> String {
    let report = &reading.report;
    let header = [
        format!("Hello, {} ({})", reading.name, reading.sex),
        format!("Email: {}", reading.email),
        String::new(),
        format!("Personality: {}", report.personality),
        format!("Destiny:     {}", report.destiny),
        format!("KUA:         {}", report.kua),
        String::new(),
        "Lo Shu Grid".to_string(),
    ];
    let legend = [
        "[n] missing   *n* core   n present".to_string(),
        String::new(),
        "Recommendations".to_string(),
    ];

    let mut out = to_text(&header);
    out.push_str(&render_grid(report));
    out.push_str(&to_text(&legend));
    out.push_str(&render_recommendation(&reading.recommendation));
    out
}

pub fn render_grid(report: &NumerologyReport) -> String {
    let border = format!("+{}+", vec!["-".repeat(CELL_WIDTH); 3].join("+"));
    let mut lines = vec![border.clone()];

    for row in report.lo_shu_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&(number, class)| {
                let label = mark(&report.grid.cell_label(number), class);
                format!("{:^width$}", label, width = CELL_WIDTH)
            })
            .collect();
        lines.push(format!("|{}|", cells.join("|")));
        lines.push(border.clone());
    }
    to_text(&lines)
}

fn mark(label: &str, class: CellClass) -> String {
    match class {
        CellClass::Missing => format!("[{}]", label),
        CellClass::Core => format!("*{}*", label),
        CellClass::Present => label.to_string(),
    }
}

pub fn render_recommendation(recommendation: &Recommendation) -> String {
    let lines = match recommendation {
        Recommendation::Complete => {
            vec!["🎉 You have no missing numbers! Keep shining!".to_string()]
        }
        Recommendation::Single {
            number,
            crystal,
            shop_url,
        } => vec![
            format!("You are missing number {} → {}", number, crystal),
            format!("Shop now: {}", shop_url),
        ],
        Recommendation::Combination { picks } => {
            let mut lines = vec!["You are missing several numbers:".to_string()];
            lines.extend(
                picks
                    .iter()
                    .map(|pick| format!("  {} → {}", pick.number, pick.crystal)),
            );
            lines.push(String::new());
            lines.push(COMBINATION_OFFER.to_string());
            lines.push(
                "Run again with --request-custom (and optionally --phone/--problems) to request a customized bracelet."
                    .to_string(),
            );
            lines
        }
    };
    to_text(&lines)
}

fn to_text(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
