use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, Form, Input, PageActions, PageHeader, PageSubtitle, PageTitle,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_page_header_composition() {
    let html = render(|| {
        rsx! {
            PageHeader {
                div {
                    PageTitle { "User Management" }
                    PageSubtitle { "Accounts, roles, and access" }
                }
                PageActions {
                    Button { "Add User" }
                }
            }
        }
    });

    assert!(html.contains(r#"class="page-header""#));
    assert!(html.contains(r#"class="page-title""#));
    assert!(html.contains("User Management"));
    assert!(html.contains(r#"class="page-subtitle""#));
    assert!(html.contains(r#"class="page-actions""#));
    assert!(html.contains("Add User"));
}

#[test]
fn test_data_table_composition() {
    let html = render(|| {
        rsx! {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Username" }
                    DataTableColumn { "Email" }
                    DataTableColumn { "Role" }
                }
                DataTableBody {
                    DataTableRow {
                        DataTableCell { "ada" }
                        DataTableCell { "ada@bytelms.dev" }
                        DataTableCell {
                            Badge { variant: BadgeVariant::Secondary, "INSTRUCTOR" }
                        }
                    }
                }
            }
        }
    });

    assert!(html.contains("<thead>"));
    assert!(html.contains("<th>Username</th>"));
    assert!(html.contains("<td>ada</td>"));
    assert!(
        html.contains(r#"class="data-table-row""#),
        "row without onclick must not get the clickable class"
    );
    assert!(html.contains(r#"data-style="secondary""#));
}

#[test]
fn test_status_badges_render_variants() {
    let html = render(|| {
        rsx! {
            div {
                Badge { variant: BadgeVariant::Success, "Approved" }
                Badge { variant: BadgeVariant::Warning, "Pending" }
            }
        }
    });

    assert!(html.contains(r#"data-style="success""#));
    assert!(html.contains("Approved"));
    assert!(html.contains(r#"data-style="warning""#));
    assert!(html.contains("Pending"));
}

#[test]
fn test_card_form_composition() {
    let html = render(|| {
        rsx! {
            Card {
                CardHeader {
                    CardTitle { "Create Course" }
                    CardDescription { "Details are submitted for approval" }
                }
                CardContent {
                    Form {
                        Input {
                            label: "Title",
                            value: "Rust for the Web",
                            placeholder: "Course title",
                        }
                        Button { variant: ButtonVariant::Primary, "Save Course" }
                    }
                }
            }
        }
    });

    assert!(html.contains(r#"class="card""#));
    assert!(html.contains("Create Course"));
    assert!(html.contains(r#"class="form""#));
    assert!(html.contains(r#"class="input-label""#));
    assert!(html.contains(r#"value="Rust for the Web""#));
    assert!(html.contains(r#"data-style="primary""#));
    assert!(html.contains("Save Course"));
}
