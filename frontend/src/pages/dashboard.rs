use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use log::error;

use crate::content::dashboard::{
    axis_ceiling, CASH_FLOW, CASH_FLOW_MONTHS, EXPENSES_BY_CATEGORY, QUICK_STATS, RECENT_TRANSACTIONS,
};

const CHART_WIDTH: u32 = 560;
const CHART_HEIGHT: u32 = 320;

fn prepare_backend(canvas: &HtmlCanvasElement) -> Result<CanvasBackend, String> {
    canvas.set_width(CHART_WIDTH);
    canvas.set_height(CHART_HEIGHT);
    CanvasBackend::with_canvas_object(canvas.clone()).ok_or_else(|| "canvas has no 2d context".to_string())
}

fn draw_cash_flow(canvas: &HtmlCanvasElement) -> Result<(), String> {
    let root = prepare_backend(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let last_month = CASH_FLOW_MONTHS.len().saturating_sub(1) as i32;
    let ceiling = axis_ceiling(CASH_FLOW.iter().flat_map(|series| series.values.iter().copied()));

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Cash Flow", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..last_month, 0..ceiling)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(CASH_FLOW_MONTHS.len())
        .x_label_formatter(&|x| {
            CASH_FLOW_MONTHS
                .get(*x as usize)
                .map(|month| month.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("${}", y))
        .draw()
        .map_err(|e| e.to_string())?;

    for series in CASH_FLOW {
        let (r, g, b) = series.rgb;
        let color = RGBColor(r, g, b);
        chart
            .draw_series(LineSeries::new(
                series.values.iter().enumerate().map(|(i, value)| (i as i32, *value)),
                color.stroke_width(2),
            ))
            .map_err(|e| e.to_string())?
            .label(series.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

fn draw_expenses(canvas: &HtmlCanvasElement) -> Result<(), String> {
    let root = prepare_backend(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let ceiling = axis_ceiling(EXPENSES_BY_CATEGORY.iter().map(|(_, amount, _)| *amount));

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Expenses by Category", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..EXPENSES_BY_CATEGORY.len(), 0..ceiling)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(EXPENSES_BY_CATEGORY.len())
        .x_label_formatter(&|x| {
            EXPENSES_BY_CATEGORY
                .get(*x)
                .map(|(name, _, _)| name.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("${}", y))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(EXPENSES_BY_CATEGORY.iter().enumerate().map(|(i, (_, amount, (r, g, b)))| {
            let mut bar = Rectangle::new([(i, 0), (i + 1, *amount)], RGBColor(*r, *g, *b).filled());
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let cash_flow_ref = use_node_ref();
    let expenses_ref = use_node_ref();

    // Draw the sample charts once mounted
    {
        let cash_flow_ref = cash_flow_ref.clone();
        let expenses_ref = expenses_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(canvas) = cash_flow_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw_cash_flow(&canvas) {
                    error!("Failed to draw cash flow chart: {}", e);
                }
            }
            if let Some(canvas) = expenses_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw_expenses(&canvas) {
                    error!("Failed to draw expenses chart: {}", e);
                }
            }
            || ()
        }, ());
    }

    html! {
        <div class="page dashboard-page">
            <style>{r#"
                .dashboard-page {
                    background: #f8fafc;
                }
                .dashboard-title {
                    margin: 0 0 0.5rem;
                    font-size: 2rem;
                }
                .dashboard-subtitle {
                    color: #6b7280;
                    margin: 0 0 2.5rem;
                }
                .stat-card {
                    padding: 1.5rem;
                }
                .stat-title {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .stat-value {
                    font-size: 1.75rem;
                    font-weight: 800;
                    margin: 0.4rem 0;
                }
                .stat-change.up, .amount.income {
                    color: #16a34a;
                }
                .stat-change.down, .amount.expense {
                    color: #dc2626;
                }
                .charts {
                    margin: 2rem 0;
                }
                .chart-card {
                    padding: 1.25rem;
                }
                .chart-card canvas {
                    max-width: 100%;
                }
                .transactions table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .transactions th, .transactions td {
                    padding: 0.75rem;
                    text-align: left;
                    border-bottom: 1px solid #f1f5f9;
                }
                .transactions th {
                    color: #6b7280;
                    font-weight: 600;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                }
                .transactions td.amount {
                    text-align: right;
                    font-weight: 600;
                }
            "#}</style>
            <div class="container">
                <h1 class="dashboard-title">{"Dashboard"}</h1>
                <p class="dashboard-subtitle">{"A preview of your business at a glance, using sample data."}</p>

                <div class="grid grid-4">
                    {
                        QUICK_STATS.iter().map(|stat| html! {
                            <div class="card stat-card">
                                <div class="stat-title">{stat.title}</div>
                                <div class="stat-value">{stat.value}</div>
                                <div class={classes!("stat-change", if stat.is_up() { "up" } else { "down" })}>
                                    {stat.change_label()}
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="grid grid-2 charts">
                    <div class="card chart-card">
                        <canvas
                            ref={cash_flow_ref}
                            width={CHART_WIDTH.to_string()}
                            height={CHART_HEIGHT.to_string()}
                        />
                    </div>
                    <div class="card chart-card">
                        <canvas
                            ref={expenses_ref}
                            width={CHART_WIDTH.to_string()}
                            height={CHART_HEIGHT.to_string()}
                        />
                    </div>
                </div>

                <div class="card transactions">
                    <h3>{"Recent Transactions"}</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Description"}</th>
                                <th>{"Category"}</th>
                                <th style="text-align: right;">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                RECENT_TRANSACTIONS.iter().map(|transaction| html! {
                                    <tr>
                                        <td>
                                            {
                                                transaction
                                                    .date()
                                                    .map(|date| date.format("%b %-d, %Y").to_string())
                                                    .unwrap_or_else(|| transaction.date.to_string())
                                            }
                                        </td>
                                        <td>{transaction.description}</td>
                                        <td>{transaction.category}</td>
                                        <td class={classes!(
                                            "amount",
                                            if transaction.is_income() { "income" } else { "expense" },
                                        )}>
                                            {transaction.display_amount()}
                                        </td>
                                    </tr>
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
