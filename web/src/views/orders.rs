use dioxus::prelude::*;
use types::{Order, OrderStatus};
use ui::{
    Modal, ModalFrame, MutationMessages, PaginationControls, SearchBox, StatusBadge,
    TableMessage, use_resource_list,
};

use super::components::{format_date, order_tone};
use crate::config::Config;

#[component]
pub fn Orders() -> Element {
    let config = use_context::<Config>();
    let list = use_resource_list::<api::Orders>(config.page_size);
    let mut viewing = use_signal(Modal::<Order>::default);

    let change_status = move |order_id: String, status: OrderStatus| {
        let client = list.client();
        let id = order_id.clone();
        list.mutate_row(
            order_id,
            async move { client.update_order_status(&id, status).await },
            MutationMessages::new(
                "Order status updated successfully!",
                "Failed to update order status",
            ),
        );
    };

    let state = list.state.read();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Orders" }
                    p { class: "page-subtitle", "Track NFC card orders and move them through fulfilment." }
                }
            }

            div { class: "toolbar",
                SearchBox {
                    value: state.raw_search().to_string(),
                    placeholder: "Search by order number or customer",
                    on_input: move |text| list.set_search(text),
                }
                select {
                    class: "form-input",
                    value: state.filters().status.map(|s| s.as_str()).unwrap_or_default(),
                    onchange: move |e| {
                        let status = OrderStatus::parse(&e.value());
                        list.change_filters(|f| f.status = status);
                    },
                    option { value: "", "All statuses" }
                    for status in OrderStatus::ALL {
                        option { value: status.as_str(), "{status.label()}" }
                    }
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Order" }
                                th { "Customer" }
                                th { "Card" }
                                th { "Qty" }
                                th { "Total" }
                                th { "Status" }
                                th { "Placed" }
                                th { "" }
                            }
                        }
                        tbody {
                            if state.is_loading() && state.items().is_empty() {
                                TableMessage { columns: 8, message: "Loading orders..." }
                            } else if state.items().is_empty() {
                                TableMessage { columns: 8, message: "No orders found" }
                            }
                            for order in state.items().iter().cloned() {
                                {
                                    let order_id = order.id.clone();
                                    let target = order.clone();
                                    let updating = state.is_row_busy(&order.id);
                                    rsx! {
                                        tr { key: "{order.id}",
                                            td { class: "form-value-mono", "{order.order_number}" }
                                            td {
                                                div { "{order.customer_name}" }
                                                div { class: "text-muted text-sm", "{order.customer_email}" }
                                            }
                                            td { "{order.card_type}" }
                                            td { "{order.quantity}" }
                                            td { "{order.formatted_total()}" }
                                            td {
                                                // Swapped out while saving so the select is rebuilt
                                                // from the reloaded row afterwards.
                                                if updating {
                                                    span { class: "text-muted text-sm", "Updating..." }
                                                } else {
                                                    select {
                                                        class: "form-input form-input-sm",
                                                        value: order.order_status.as_str(),
                                                        onchange: move |e| {
                                                            if let Some(status) = OrderStatus::parse(&e.value()) {
                                                                change_status(order_id.clone(), status);
                                                            }
                                                        },
                                                        for status in OrderStatus::ALL {
                                                            option {
                                                                value: status.as_str(),
                                                                selected: status == order.order_status,
                                                                "{status.label()}"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                            td { "{format_date(order.created_at)}" }
                                            td {
                                                button {
                                                    class: "btn btn-link",
                                                    onclick: move |_| viewing.write().open(target.clone()),
                                                    "View"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                PaginationControls {
                    page: state.page(),
                    last_page: state.last_page(),
                    total: state.pagination().total,
                    on_previous: move |_| list.previous_page(),
                    on_next: move |_| list.next_page(),
                }
            }

            if let Some(order) = viewing.read().target().cloned() {
                ModalFrame {
                    title: format!("Order {}", order.order_number),
                    on_close: move |_| viewing.write().close(),
                    OrderDetails { order }
                }
            }
        }
    }
}

#[component]
fn OrderDetails(order: Order) -> Element {
    let design = &order.card_design;

    rsx! {
        div { class: "modal-body",
            div { class: "form-group",
                span { class: "form-label", "Status" }
                StatusBadge { label: order.order_status.label(), tone: order_tone(order.order_status) }
            }
            div { class: "form-group",
                span { class: "form-label", "Customer" }
                div { class: "form-value", "{order.customer_name}" }
                div { class: "form-value text-muted", "{order.customer_email}" }
                if let Some(phone) = &order.customer_phone {
                    div { class: "form-value", "{phone}" }
                }
            }
            if let Some(address) = &order.shipping_address {
                div { class: "form-group",
                    span { class: "form-label", "Shipping Address" }
                    div { class: "form-value", "{address}" }
                }
            }
            div { class: "form-group",
                span { class: "form-label", "Card" }
                div { class: "form-value", "{order.card_type} x {order.quantity}, {order.formatted_total()}" }
            }

            div { class: "divider" }

            h3 { class: "section-header", "Card Design" }
            div { class: "form-group",
                span { class: "form-label", "Template" }
                div { class: "form-value", {design.template_name.clone().unwrap_or_else(|| "Default".into())} }
            }
            if let Some(color) = &design.primary_color {
                div { class: "form-group",
                    span { class: "form-label", "Primary Color" }
                    div { class: "form-value",
                        span { class: "color-swatch", style: "background: {color}" }
                        "{color}"
                    }
                }
            }
            if let Some(text) = &design.front_text {
                div { class: "form-group",
                    span { class: "form-label", "Front" }
                    div { class: "form-value", "{text}" }
                }
            }
            if let Some(text) = &design.back_text {
                div { class: "form-group",
                    span { class: "form-label", "Back" }
                    div { class: "form-value", "{text}" }
                }
            }
            if let Some(url) = &design.logo_url {
                div { class: "form-group",
                    span { class: "form-label", "Logo" }
                    img { class: "logo-preview", src: "{url}", alt: "Logo" }
                }
            }
        }
    }
}
