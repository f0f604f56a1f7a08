use maud::{html, Markup};

/// How a chart value should read: rupee amounts or plain counts.
#[derive(Clone, Copy)]
pub enum ValueKind {
    Money,
    Count,
}

fn format_value(kind: ValueKind, v: f64) -> String {
    match kind {
        ValueKind::Money => format!("₹ {v:.2}"),
        ValueKind::Count => format!("{}", v.round() as i64),
    }
}

/// Horizontal CSS bar chart; bars scale against the largest value.
/// Callers handle the empty case, so `rows` is never empty here.
pub fn bar_chart(rows: &[(String, f64)], kind: ValueKind) -> Markup {
    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    html! {
        div class="chart" {
            @for (label, value) in rows {
                div class="chart-row" {
                    span class="chart-label" { (label) }
                    div class="chart-track" {
                        div
                            class="chart-bar"
                            style=(format!(
                                "width: {:.1}%",
                                if max > 0.0 { value / max * 100.0 } else { 0.0 }
                            )) {}
                    }
                    span class="chart-value" { (format_value(kind, *value)) }
                }
            }
        }
    }
}

const LINE_W: f64 = 640.0;
const LINE_H: f64 = 220.0;
const PAD: f64 = 30.0;

/// SVG polyline for ordered series like the monthly revenue trend.
pub fn line_chart(rows: &[(String, f64)], kind: ValueKind) -> Markup {
    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let n = rows.len();

    let x_at = |i: usize| {
        if n <= 1 {
            LINE_W / 2.0
        } else {
            PAD + (LINE_W - 2.0 * PAD) * i as f64 / (n - 1) as f64
        }
    };
    let y_at = |v: f64| {
        if max > 0.0 {
            LINE_H - PAD - (LINE_H - 2.0 * PAD) * v / max
        } else {
            LINE_H - PAD
        }
    };

    let points: String = rows
        .iter()
        .enumerate()
        .map(|(i, (_, v))| format!("{:.1},{:.1}", x_at(i), y_at(*v)))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        svg
            viewBox=(format!("0 0 {LINE_W} {LINE_H}"))
            width="100%"
            preserveAspectRatio="xMidYMid meet"
            xmlns="http://www.w3.org/2000/svg"
        {
            polyline
                points=(points)
                fill="none"
                stroke="#524ed2"
                stroke-width="2" {}
            @for (i, (label, value)) in rows.iter().enumerate() {
                circle cx=(format!("{:.1}", x_at(i))) cy=(format!("{:.1}", y_at(*value))) r="3" fill="#524ed2" {
                    title { (label) ": " (format_value(kind, *value)) }
                }
                text
                    x=(format!("{:.1}", x_at(i)))
                    y=(format!("{:.1}", LINE_H - 8.0))
                    text-anchor="middle"
                    font-size="10"
                    fill="#555"
                { (label) }
            }
        }
    }
}
