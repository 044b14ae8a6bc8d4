use dioxus::prelude::*;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, DialogActions, DialogContent, DialogRoot, DialogTitle, FormSelect, Input, Label,
    PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton, ToastOptions,
};

use api_client::api::admin as admin_api;
use shared_types::{CreateUserRequest, Role, User};

use crate::components::stat_card::StatCard;

/// User roster with role management, account creation, and deletion.
#[component]
pub fn UserManagementPage() -> Element {
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(|| "ALL".to_string());
    let mut delete_target = use_signal(|| Option::<User>::None);

    // Create-user dialog state
    let mut show_create = use_signal(|| false);
    let mut form_username = use_signal(String::new);
    let mut form_email = use_signal(String::new);
    let mut form_password = use_signal(String::new);
    let mut form_role = use_signal(|| Role::Student.wire_name().to_string());
    let mut saving = use_signal(|| false);

    let mut data = use_resource(move || async move { admin_api::list_users().await });

    let handle_delete = move |_| {
        let Some(user) = delete_target.read().clone() else {
            return;
        };
        spawn(async move {
            match admin_api::delete_user(user.id).await {
                Ok(message) => {
                    data.restart();
                    toast.success(message, ToastOptions::new());
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
            delete_target.set(None);
        });
    };

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        if *saving.read() {
            return;
        }
        let request = CreateUserRequest {
            username: form_username.read().clone(),
            email: form_email.read().clone(),
            password: form_password.read().clone(),
            role: form_role.read().clone(),
        };
        spawn(async move {
            saving.set(true);
            match admin_api::create_user(&request).await {
                Ok(created) => {
                    show_create.set(false);
                    form_username.set(String::new());
                    form_email.set(String::new());
                    form_password.set(String::new());
                    form_role.set(Role::Student.wire_name().to_string());
                    data.restart();
                    toast.success(
                        format!("User \"{}\" created", created.username),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let delete_message = delete_target
        .read()
        .as_ref()
        .map(|u| {
            format!(
                "Are you sure you want to delete user \"{}\"? This action cannot be undone.",
                u.username
            )
        })
        .unwrap_or_default();

    let body = match &*data.read() {
        Some(Ok(users)) => {
            let query = search.read().to_lowercase();
            let filter = role_filter.read().clone();
            let filtered: Vec<User> = users
                .iter()
                .filter(|u| {
                    let matches_search = u.username.to_lowercase().contains(&query)
                        || u.email.to_lowercase().contains(&query);
                    let matches_role =
                        filter == "ALL" || u.role() == Role::from_str_or_default(&filter);
                    matches_search && matches_role
                })
                .cloned()
                .collect();

            rsx! {
                div { class: "stat-grid",
                    StatCard { label: "Total Users", value: users.len().to_string() }
                    StatCard {
                        label: "Students",
                        value: users.iter().filter(|u| u.role() == Role::Student).count().to_string(),
                    }
                    StatCard {
                        label: "Instructors",
                        value: users.iter().filter(|u| u.role() == Role::Instructor).count().to_string(),
                    }
                    StatCard {
                        label: "Admins",
                        value: users.iter().filter(|u| u.role() == Role::Admin).count().to_string(),
                    }
                }

                div { class: "user-filters",
                    Input {
                        label: "Search Users",
                        placeholder: "Search by username or email...",
                        value: search.read().clone(),
                        on_input: move |e: FormEvent| search.set(e.value()),
                    }
                    FormSelect {
                        label: "Filter by Role",
                        value: role_filter.read().clone(),
                        onchange: move |e: FormEvent| role_filter.set(e.value()),
                        option { value: "ALL", "All Roles" }
                        option { value: "ROLE_ADMIN", "Admin" }
                        option { value: "ROLE_INSTRUCTOR", "Instructor" }
                        option { value: "ROLE_STUDENT", "Student" }
                    }
                }

                if filtered.is_empty() {
                    div { class: "empty-state",
                        h3 { "No users found" }
                        p { "Try adjusting your search or filters" }
                    }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "User" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Role" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            for user in filtered {
                                UserRow {
                                    key: "{user.id}",
                                    user: user.clone(),
                                    on_changed: move |_| data.restart(),
                                    on_delete: move |user: User| delete_target.set(Some(user)),
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "page-error", "{e.user_message()}" }
        },
        None => rsx! {
            div { class: "loading",
                Skeleton {}
                Skeleton {}
                Skeleton {}
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        div { class: "page-stack",
            PageHeader {
                div {
                    PageTitle { "User Management" }
                    PageSubtitle { "Manage user roles and system access" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_create.set(true),
                        "Add User"
                    }
                }
            }

            {body}

            // Delete confirmation
            AlertDialogRoot {
                open: delete_target.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        delete_target.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Delete User" }
                    AlertDialogDescription { "{delete_message}" }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction {
                            on_click: handle_delete,
                            "Delete"
                        }
                    }
                }
            }

            // Create-user dialog
            DialogRoot {
                open: show_create(),
                on_open_change: move |open: bool| show_create.set(open),
                DialogContent {
                    DialogTitle { "Add User" }
                    form { onsubmit: handle_create,
                        div { class: "form-grid",
                            div { class: "form-row",
                                Label { html_for: "new-username", "Username" }
                                Input {
                                    id: "new-username",
                                    value: form_username.read().clone(),
                                    on_input: move |e: FormEvent| form_username.set(e.value()),
                                }
                            }
                            div { class: "form-row",
                                Label { html_for: "new-email", "Email" }
                                Input {
                                    id: "new-email",
                                    input_type: "email",
                                    value: form_email.read().clone(),
                                    on_input: move |e: FormEvent| form_email.set(e.value()),
                                }
                            }
                            div { class: "form-row",
                                Label { html_for: "new-password", "Password" }
                                Input {
                                    id: "new-password",
                                    input_type: "password",
                                    value: form_password.read().clone(),
                                    on_input: move |e: FormEvent| form_password.set(e.value()),
                                }
                            }
                            FormSelect {
                                label: "Role",
                                value: form_role.read().clone(),
                                onchange: move |e: FormEvent| form_role.set(e.value()),
                                option { value: "ROLE_STUDENT", "Student" }
                                option { value: "ROLE_INSTRUCTOR", "Instructor" }
                                option { value: "ROLE_ADMIN", "Admin" }
                            }
                        }
                        DialogActions {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| show_create.set(false),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "button",
                                "data-style": "primary",
                                disabled: saving(),
                                if saving() { "Creating..." } else { "Create User" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Badge styling per role, matching the role colors used across the admin
/// screens.
fn role_badge(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Instructor => BadgeVariant::Primary,
        Role::Student => BadgeVariant::Secondary,
    }
}

/// One roster row. Role editing is row-local so only the row being changed
/// re-renders while the admin picks a new role.
#[component]
fn UserRow(user: User, on_changed: EventHandler<()>, on_delete: EventHandler<User>) -> Element {
    let toast = use_toast();
    let mut editing = use_signal(|| false);
    let mut pending_role = use_signal(String::new);

    let user_id = user.id;
    let current_role_name = user
        .role
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| Role::Student.wire_name().to_string());
    let role = user.role();
    let initial = user
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let user_for_delete = user.clone();

    let start_edit = move |_| {
        pending_role.set(current_role_name.clone());
        editing.set(true);
    };

    let save_role = move |_| {
        let role = Role::from_str_or_default(&pending_role.read());
        spawn(async move {
            match admin_api::update_user_role(user_id, role).await {
                Ok(_) => {
                    editing.set(false);
                    toast.success("User role updated".to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "user-cell",
                    div { class: "user-avatar", "{initial}" }
                    div { class: "user-cell-text",
                        div { class: "user-cell-name", "{user.username}" }
                        div { class: "user-cell-id", "ID: {user.id}" }
                    }
                }
            }
            DataTableCell { "{user.email}" }
            DataTableCell {
                if editing() {
                    div { class: "user-role-editor",
                        FormSelect {
                            value: pending_role.read().clone(),
                            onchange: move |e: FormEvent| pending_role.set(e.value()),
                            option { value: "ROLE_STUDENT", "Student" }
                            option { value: "ROLE_INSTRUCTOR", "Instructor" }
                            option { value: "ROLE_ADMIN", "Admin" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: save_role,
                            "Save"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                } else {
                    div { class: "user-role-display",
                        Badge { variant: role_badge(role), "{role.as_str()}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: start_edit,
                            "Edit Role"
                        }
                    }
                }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(user_for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}
