//! Input table (matrix question)
//!
//! Columns and rows keep their order. Appended entries are labelled
//! "Column N"/"Row N" from the count at the time they are added.

use dioxus::prelude::*;
use formula_ir::{ElementContent, TableColumn, TableRow};

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextInput};
use crate::components::text_block::ElementViewProps;

/// Matrix of radio cells with editable headers and labels
#[component]
pub fn InputTableView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let editing = props.editing;
    let title = element.display_title();
    let (columns, rows): (Vec<TableColumn>, Vec<TableRow>) = match &element.content {
        ElementContent::Table { columns, rows, .. } => (columns.clone(), rows.clone()),
        _ => (Vec::new(), Vec::new()),
    };
    let group_prefix = id.to_string();

    rsx! {
        div {
            class: "fm-table-element",

            if editing {
                TextInput {
                    value: title,
                    variant: InputVariant::Title,
                    on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
                }
            } else {
                label { class: "fm-field-label", "{title}" }
            }

            table {
                class: "fm-matrix",
                thead {
                    tr {
                        th {}
                        for column in columns.iter().cloned() {
                            th {
                                key: "{column.id}",
                                if editing {
                                    div {
                                        class: "fm-matrix-cell-edit",
                                        TextInput {
                                            value: column.header.clone(),
                                            on_change: move |v: String| {
                                                edit_content(id, |c| c.with_column_header(column.id, v))
                                            },
                                        }
                                        button {
                                            class: "fm-icon-btn",
                                            title: "Remove column",
                                            onclick: move |e| {
                                                e.stop_propagation();
                                                edit_content(id, |c| c.without_column(column.id));
                                            },
                                            "✕"
                                        }
                                    }
                                } else {
                                    "{column.header}"
                                }
                            }
                        }
                        if editing {
                            th {
                                button {
                                    class: "fm-btn fm-btn-link",
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        edit_content(id, ElementContent::with_added_column);
                                    },
                                    "+ add column"
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter().cloned() {
                        tr {
                            key: "{row.id}",
                            td {
                                class: "fm-matrix-row-label",
                                if editing {
                                    div {
                                        class: "fm-matrix-cell-edit",
                                        TextInput {
                                            value: row.label.clone(),
                                            on_change: move |v: String| {
                                                edit_content(id, |c| c.with_row_label(row.id, v))
                                            },
                                        }
                                        button {
                                            class: "fm-icon-btn",
                                            title: "Remove row",
                                            onclick: move |e| {
                                                e.stop_propagation();
                                                edit_content(id, |c| c.without_row(row.id));
                                            },
                                            "✕"
                                        }
                                    }
                                } else {
                                    "{row.label}"
                                }
                            }
                            for column in columns.iter() {
                                td {
                                    key: "{column.id}",
                                    class: "fm-matrix-cell",
                                    input {
                                        r#type: "radio",
                                        name: "{group_prefix}-{row.id}",
                                        value: "{column.header}",
                                    }
                                }
                            }
                            if editing {
                                td {}
                            }
                        }
                    }
                }
            }

            if editing {
                button {
                    class: "fm-btn fm-btn-link",
                    onclick: move |e| {
                        e.stop_propagation();
                        edit_content(id, ElementContent::with_added_row);
                    },
                    "+ add row"
                }
            }
        }
    }
}
