//! UI Components

use leptos::prelude::*;

use landing_core::message::{ContentBlock, DataTable, Scalar};
use landing_core::Message;

/// Message bubble: one transcript turn, blocks rendered in order
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message message-{}", message.role());
    let role = message.role().to_string();

    let blocks = message
        .blocks()
        .iter()
        .cloned()
        .map(|block| match block {
            ContentBlock::Text { text } => {
                view! { <p class="content">{text}</p> }.into_any()
            }
            ContentBlock::Data(table) => view! { <DataCard table=table /> }.into_any(),
        })
        .collect_view();

    view! {
        <div class=class>
            <span class="role">{role}</span>
            {blocks}
        </div>
    }
}

/// Tabular attachment: title, table/chart toggle (table is the
/// default view), and a collapsible glossary
#[component]
pub fn DataCard(table: DataTable) -> impl IntoView {
    let (show_chart, set_show_chart) = signal(false);

    let title = table.title().trim_start_matches('#').trim().to_string();

    let header = view! {
        <tr>
            <th class="row-key">{table.index_column().to_string()}</th>
            {table
                .columns()
                .iter()
                .map(|c| view! { <th>{c.clone()}</th> })
                .collect_view()}
        </tr>
    };

    let body = table
        .rows()
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td class="row-key">{row.key.to_string()}</td>
                    {row
                        .values
                        .iter()
                        .map(|v| view! { <td>{v.to_string()}</td> })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view();

    // The chart plots the first value column against the row keys
    let chart_column = table.columns().first().cloned().unwrap_or_default();
    let max = table.column_max(0).unwrap_or(0.0);
    let bars = table
        .rows()
        .iter()
        .map(|row| {
            let value = row.values.first().and_then(Scalar::as_number).unwrap_or(0.0);
            let pct = if max > 0.0 { value / max * 100.0 } else { 0.0 };
            view! {
                <div class="bar-row">
                    <span class="bar-label">{row.key.to_string()}</span>
                    <div class="bar" style:width=format!("{pct:.1}%")></div>
                    <span class="bar-value">{value.to_string()}</span>
                </div>
            }
        })
        .collect_view();

    let glossary = table
        .glossary()
        .iter()
        .map(|g| {
            view! {
                <dt>{g.abbreviation.clone()}</dt>
                <dd>{g.definition.clone()}</dd>
            }
        })
        .collect_view();

    view! {
        <div class="data-card">
            <h3 class="card-title">{title}</h3>

            <div class="tabs">
                <button
                    class:active=move || !show_chart.get()
                    on:click=move |_| set_show_chart.set(false)
                >
                    "Table"
                </button>
                <button
                    class:active=move || show_chart.get()
                    on:click=move |_| set_show_chart.set(true)
                >
                    "Chart"
                </button>
            </div>

            <div
                class="view-table"
                style:display=move || if show_chart.get() { "none" } else { "block" }
            >
                <table>
                    <thead>{header}</thead>
                    <tbody>{body}</tbody>
                </table>
            </div>

            <div
                class="view-chart"
                style:display=move || if show_chart.get() { "block" } else { "none" }
            >
                <p class="chart-caption">{chart_column}</p>
                {bars}
            </div>

            <details class="glossary">
                <summary>"Glossary"</summary>
                <dl>{glossary}</dl>
            </details>
        </div>
    }
}
