use maud::{html, Markup, DOCTYPE, PreEscaped};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #1f2937; }
header { display: flex; align-items: center; gap: 12px; padding: 12px 24px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
header h3 { margin: 0; }
main.container { max-width: 1100px; margin: 0 auto; padding: 24px; }
.kpi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 24px; }
.card { background: #fff; border-radius: 8px; padding: 16px 20px; margin-bottom: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); }
.card h2 { margin: 0 0 10px; font-size: 1.05rem; }
.kpi-value { font-size: 1.6rem; font-weight: 700; }
.chart-row { display: flex; align-items: center; gap: 8px; margin: 4px 0; }
.chart-label { flex: 0 0 160px; font-size: 0.9rem; text-align: right; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.chart-bar { height: 18px; background: #524ed2; border-radius: 3px; min-width: 2px; }
.chart-track { flex: 1; }
.chart-value { font-size: 0.85rem; color: #555; white-space: nowrap; }
.info-box { padding: 12px 16px; border-radius: 6px; background: #eff6ff; color: #1d4ed8; }
.warning-box { padding: 12px 16px; border-radius: 6px; background: #fef3c7; color: #92400e; }
form.filters { display: flex; gap: 10px; align-items: end; flex-wrap: wrap; }
form.filters label { display: flex; flex-direction: column; font-size: 0.85rem; gap: 4px; }
form.filters input[type=date] { padding: 6px; font-size: 15px; }
form.filters button { padding: 8px 16px; font-size: 15px; cursor: pointer; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M3 3v18h18" {}
                        path d="M7 14l4 -4l3 3l5 -6" {}
                    }
                    h3 { "E-Commerce Sales Dashboard" }
                }
                (content)
            }
        }
    }
}
