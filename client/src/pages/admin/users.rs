//! User administration: rename, change role, delete.
//!
//! An admin may edit their own username but not their own role, and may
//! never delete their own account.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::{delete_user, list_users, update_user};
use session::types::{Role, UpdateUserDto, User};
use session::validation::{USERNAME_TOO_SHORT, display_date};

use crate::app::use_api;
use crate::components::notice::{Notice, NoticeLine};
use crate::state::auth::AuthState;
use crate::util::browser;
use crate::util::format::short_id;

const SELF_DELETE_REJECTED: &str = "Admins cannot delete their own account.";
const MIN_USERNAME_LEN: usize = 3;

fn can_delete(current_user_id: Option<&str>, target_id: &str) -> bool {
    current_user_id != Some(target_id)
}

/// Fields that differ from `original`. `Ok(None)` when nothing changed.
fn user_changes(original: &User, username: &str, role: Role) -> Result<Option<UpdateUserDto>, &'static str> {
    let username = username.trim();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(USERNAME_TOO_SHORT);
    }
    let dto = UpdateUserDto {
        username: (username != original.username).then(|| username.to_owned()),
        role: (role != original.role).then_some(role),
    };
    Ok((dto.username.is_some() || dto.role.is_some()).then_some(dto))
}

fn member_since(created_at: Option<&str>) -> String {
    created_at.map_or_else(|| "N/A".to_owned(), display_date)
}

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let api = use_api();
    let auth = expect_context::<RwSignal<AuthState>>();
    let current_id = move || auth.with(|a| a.user.as_ref().map(|u| u.id.clone()));

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let action = RwSignal::new(None::<Notice>);
    let editing = RwSignal::new(None::<User>);
    let edit_username = RwSignal::new(String::new());
    let edit_role = RwSignal::new(Role::User);
    let submitting = RwSignal::new(false);

    let client = api.client();
    spawn_local(async move {
        match list_users(&client).await {
            Ok(list) => users.set(list),
            Err(e) => {
                log::error!("fetching users failed: {e}");
                error.set(Some(e.user_message("Failed to fetch users")));
            }
        }
        loading.set(false);
    });

    let start_edit = move |user: User| {
        action.set(None);
        edit_username.set(user.username.clone());
        edit_role.set(user.role);
        editing.set(Some(user));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(original) = editing.get_untracked() else {
            return;
        };
        if submitting.get_untracked() {
            return;
        }
        action.set(None);
        let dto = match user_changes(&original, &edit_username.get_untracked(), edit_role.get_untracked()) {
            Ok(Some(dto)) => dto,
            Ok(None) => {
                editing.set(None);
                return;
            }
            Err(message) => {
                action.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match update_user(&client, &original.id, &dto).await {
                Ok(updated) => {
                    action.set(Some(Notice::Success(format!(
                        "User \"{}\" updated successfully.",
                        updated.username
                    ))));
                    users.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|u| u.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    editing.set(None);
                }
                Err(e) => {
                    log::error!("updating user {} failed: {e}", original.id);
                    action.set(Some(Notice::Error(e.user_message("Failed to update user"))));
                }
            }
            submitting.set(false);
        });
    };

    let on_delete = move |user: User| {
        action.set(None);
        if !can_delete(current_id().as_deref(), &user.id) {
            action.set(Some(Notice::Error(SELF_DELETE_REJECTED.to_owned())));
            return;
        }
        let prompt = format!(
            "Are you sure you want to delete the user \"{}\"? This action cannot be undone.",
            user.username
        );
        if !browser::confirm(&prompt) {
            return;
        }
        let client = api.client();
        spawn_local(async move {
            match delete_user(&client, &user.id).await {
                Ok(ack) => {
                    log::info!("deleted user {}: {ack}", user.id);
                    users.update(|list| list.retain(|u| u.id != user.id));
                    if editing.with_untracked(|e| e.as_ref().is_some_and(|u| u.id == user.id)) {
                        editing.set(None);
                    }
                    action.set(Some(Notice::Success(format!(
                        "User \"{}\" deleted successfully.",
                        user.username
                    ))));
                }
                Err(e) => {
                    log::error!("deleting user {} failed: {e}", user.id);
                    action.set(Some(Notice::Error(e.user_message("Failed to delete user"))));
                }
            }
        });
    };

    let editing_self = move || {
        let editing_id = editing.with(|e| e.as_ref().map(|u| u.id.clone()));
        editing_id.is_some() && editing_id == current_id()
    };

    view! {
        <div class="admin-page">
            <h1>"Manage Users"</h1>
            <NoticeLine notice=action/>
            <Show when=move || editing.get().is_some()>
                <form class="admin-edit card" on:submit=on_submit>
                    <h3>
                        "Editing User: "
                        {move || editing.with(|e| e.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                    </h3>
                    <label class="form-field">
                        "Username"
                        <input
                            class="form-input"
                            type="text"
                            required
                            minlength="3"
                            disabled=move || submitting.get()
                            prop:value=move || edit_username.get()
                            on:input=move |ev| edit_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Role"
                        <select
                            class="form-input"
                            disabled=move || submitting.get() || editing_self()
                            prop:value=move || edit_role.get().as_str()
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    edit_role.set(role);
                                }
                            }
                        >
                            <option value="user">"User"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </label>
                    <div class="admin-edit__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            "Save Changes"
                        </button>
                        <button
                            class="btn"
                            type="button"
                            disabled=move || submitting.get()
                            on:click=move |_| editing.set(None)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                <h2>{move || format!("All Users ({})", users.get().len())}</h2>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Role"</th>
                            <th>"Member Since"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = users.get();
                            if list.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="5" class="muted">"No users found."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let me = current_id();
                            list.into_iter()
                                .map(|user| {
                                    let to_edit = user.clone();
                                    let to_delete = user.clone();
                                    let is_self = me.as_deref() == Some(user.id.as_str());
                                    let row_id = user.id.clone();
                                    let row_class = move || {
                                        let active = editing
                                            .with(|e| e.as_ref().is_some_and(|u| u.id == row_id));
                                        if active { "admin-table__row--editing" } else { "" }
                                    };
                                    view! {
                                        <tr class=row_class>
                                            <td>
                                                <abbr title=user.id.clone()>{short_id(&user.id)}</abbr>
                                            </td>
                                            <td>{user.username.clone()}</td>
                                            <td>
                                                <span class=format!("role-badge role-badge--{}", user.role)>
                                                    {user.role.as_str()}
                                                </span>
                                            </td>
                                            <td>{member_since(user.created_at.as_deref())}</td>
                                            <td class="admin-table__actions">
                                                <button class="btn" on:click=move |_| start_edit(to_edit.clone())>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=is_self
                                                    on:click=move |_| on_delete(to_delete.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
