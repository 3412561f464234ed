use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::{DashboardRequest, DashboardSnapshot},
    domain::{
        chart::ChartSpec,
        logging::LogComponent,
        market_data::{LatestMetrics, MagnificentSeven},
    },
    infrastructure::rendering::CanvasRenderer,
    log_error, log_warn,
    presentation::{
        config::{page_config, page_service},
        format::{
            format_date, format_decimal, format_percent, format_price, format_volume,
            group_thousands,
        },
    },
};
use chrono::NaiveDate;
use strum::IntoEnumIterator;

/// 📈 Root component: sidebar controls plus the dashboard panel
#[component]
pub fn App() -> impl IntoView {
    let (default_start, default_end) = page_config().default_range(chrono::Local::now().date_naive());

    let symbol = create_rw_signal(MagnificentSeven::Apple);
    let start = create_rw_signal(default_start);
    let end = create_rw_signal(default_end);
    let show_price = create_rw_signal(true);
    let show_volume = create_rw_signal(true);

    let dashboard = create_local_resource(
        move || {
            DashboardRequest::new(symbol.get().symbol(), start.get(), end.get())
                .with_price_chart(show_price.get())
                .with_volume_chart(show_volume.get())
        },
        move |request| async move { page_service().build(&request).await },
    );

    view! {
        <style>{STYLES}</style>
        <div class="m7-dashboard">
            <Sidebar
                symbol=symbol
                start=start
                end=end
                show_price=show_price
                show_volume=show_volume
            />
            <main class="main-panel">
                <Show when=move || dashboard.loading().get()>
                    <div class="loading">"⏳ Loading market data..."</div>
                </Show>
                <Transition fallback=|| ()>
                    {move || dashboard.get().map(|result| match result {
                        Ok(snapshot) => view! { <DashboardBody snapshot=snapshot /> }.into_view(),
                        Err(error) => {
                            log_error!(LogComponent::Presentation("App"), "{error}");
                            view! { <ErrorBanner message=error.to_string() /> }.into_view()
                        }
                    })}
                </Transition>
                <About />
            </main>
        </div>
    }
}

#[component]
fn Sidebar(
    symbol: RwSignal<MagnificentSeven>,
    start: RwSignal<NaiveDate>,
    end: RwSignal<NaiveDate>,
    show_price: RwSignal<bool>,
    show_volume: RwSignal<bool>,
) -> impl IntoView {
    let on_symbol = move |ev: web_sys::Event| {
        if let Ok(ticker) = event_target_value(&ev).parse::<MagnificentSeven>() {
            symbol.set(ticker);
        }
    };
    let date_setter = move |target: RwSignal<NaiveDate>| {
        move |ev: web_sys::Event| match NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
            Ok(date) => target.set(date),
            Err(_) => {
                log_warn!(LogComponent::Presentation("Sidebar"), "Ignoring unparsable date input");
            }
        }
    };

    view! {
        <aside class="sidebar">
            <h1>"📈 M7 Dashboard"</h1>
            <label for="symbol">"Select stock symbol"</label>
            <select id="symbol" on:change=on_symbol>
                {MagnificentSeven::iter()
                    .map(|ticker| {
                        view! {
                            <option value=ticker.to_string() selected=move || symbol.get() == ticker>
                                {format!("{} ({})", ticker, ticker.company_name())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <label for="start-date">"Start date"</label>
            <input
                id="start-date"
                type="date"
                prop:value=move || start.get().format("%Y-%m-%d").to_string()
                on:change=date_setter(start)
            />
            <label for="end-date">"End date"</label>
            <input
                id="end-date"
                type="date"
                prop:value=move || end.get().format("%Y-%m-%d").to_string()
                on:change=date_setter(end)
            />
            <h3>"Display Options"</h3>
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || show_price.get()
                    on:change=move |ev| show_price.set(event_target_checked(&ev))
                />
                "Show Candlestick Chart"
            </label>
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || show_volume.get()
                    on:change=move |ev| show_volume.set(event_target_checked(&ev))
                />
                "Show Volume Chart"
            </label>
        </aside>
    }
}

#[component]
fn DashboardBody(snapshot: DashboardSnapshot) -> impl IntoView {
    let latest = snapshot.latest().clone();
    let rows: Vec<HistoryRow> = snapshot.recent_bars().into_iter().map(HistoryRow::from).collect();
    let charts: Vec<ChartSpec> =
        snapshot.price_chart.into_iter().chain(snapshot.volume_chart).collect();

    view! {
        <div class="columns">
            <section class="column">
                <KeyMetrics latest=latest />
                <HistoryTable rows=rows />
            </section>
            <section class="column">
                {charts.into_iter().map(|spec| view! { <ChartCanvas spec=spec /> }).collect_view()}
            </section>
        </div>
    }
}

#[component]
fn KeyMetrics(latest: LatestMetrics) -> impl IntoView {
    let cards = [
        ("Last Close Date", format_date(latest.date)),
        ("Last Close Price", format_price(latest.close)),
        ("Last Volume", format_volume(latest.volume)),
        ("Daily Volatility (High-Low %)", format_percent(latest.daily_volatility_pct)),
    ];

    view! {
        <h3>"Key Metrics"</h3>
        <div class="metrics">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="metric">
                            <div class="metric-label">{label}</div>
                            <div class="metric-value">{value}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Pre-formatted cells of one history table row
#[derive(Clone)]
struct HistoryRow {
    date: String,
    open: String,
    high: String,
    low: String,
    close: String,
    volume: String,
}

impl From<&crate::domain::market_data::PriceBar> for HistoryRow {
    fn from(bar: &crate::domain::market_data::PriceBar) -> Self {
        Self {
            date: format_date(Some(bar.date())),
            open: format_decimal(bar.open().value()),
            high: format_decimal(bar.high().value()),
            low: format_decimal(bar.low().value()),
            close: format_decimal(bar.close().value()),
            volume: group_thousands(bar.volume().value()),
        }
    }
}

#[component]
fn HistoryTable(rows: Vec<HistoryRow>) -> impl IntoView {
    view! {
        <h3>"Historical Data (Last 3 Days)"</h3>
        <table class="history">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Open"</th>
                    <th>"High"</th>
                    <th>"Low"</th>
                    <th>"Close"</th>
                    <th>"Volume"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.date}</td>
                                <td>{row.open}</td>
                                <td>{row.high}</td>
                                <td>{row.low}</td>
                                <td>{row.close}</td>
                                <td>{row.volume}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// 🎨 One chart drawn with the Canvas 2D renderer once the element is mounted
#[component]
fn ChartCanvas(spec: ChartSpec) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let (width, height) = (spec.layout.width, spec.layout.height);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let rendered =
            CanvasRenderer::new((*canvas).clone()).and_then(|renderer| renderer.render(&spec));
        if let Err(e) = rendered {
            log_error!(LogComponent::Presentation("ChartCanvas"), "❌ Render error: {e:?}");
        }
    });

    view! { <canvas class="chart" node_ref=canvas_ref width=width height=height /> }
}

#[component]
fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <strong>"Market data unavailable: "</strong>
            {message}
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <details class="about" open=true>
            <summary>"About"</summary>
            <ul>
                <li>
                    "Data Source: "
                    <a href="https://finance.yahoo.com" target="_blank">"Yahoo Finance"</a>
                    "."
                </li>
                <li>
                    <strong class="accent">"Key Metrics"</strong>
                    ": Last close date, price, volume, and daily volatility (percentage)."
                </li>
                <li>"Moving averages use the trailing 10 and 20 closing prices."</li>
            </ul>
        </details>
    }
}

const STYLES: &str = r#"
.m7-dashboard {
    display: flex;
    min-height: 100vh;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #0e1117;
    color: #fafafa;
}
.sidebar {
    display: flex;
    flex-direction: column;
    gap: 8px;
    width: 260px;
    padding: 24px 16px;
    background: #262730;
}
.main-panel { flex: 1; padding: 24px; }
.columns { display: flex; gap: 24px; flex-wrap: wrap; }
.column { flex: 1; min-width: 360px; }
.metrics { display: flex; flex-direction: column; gap: 12px; }
.metric-label { font-size: 14px; color: #a3a8b8; }
.metric-value { font-size: 28px; }
.history { border-collapse: collapse; width: 100%; }
.history th, .history td { padding: 4px 8px; border-bottom: 1px solid #333; text-align: right; }
.chart { display: block; margin-bottom: 16px; border-radius: 6px; }
.loading { padding: 8px; color: #a3a8b8; }
.error-banner {
    padding: 12px;
    margin-bottom: 16px;
    background: #3e1e1e;
    border: 1px solid #ff4b4b;
    border-radius: 6px;
}
.about { margin-top: 24px; }
.accent { color: #ffa500; }
"#;
