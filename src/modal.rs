//! The view, edit and delete confirmation dialogs.
//!
//! There are two slots: one for the view/edit dialog and one for the delete
//! confirmation. Each slot is an element on the page that dialogs are
//! swapped into, so opening a dialog replaces any dialog already in that
//! slot. [ModalManager] mirrors what is in each slot on the server.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    endpoints::format_endpoint,
    html::{
        BUTTON_DANGER_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE,
        DELETE_MODAL_CONTAINER_ID, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, MODAL_BACKDROP_STYLE,
        MODAL_CONTAINER_ID, MODAL_CONTENT_STYLE, id_selector,
    },
    transaction::{SyncState, Transaction, TransactionId, TransactionType, format_amount},
};

/// The dialog in the view/edit slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    View(TransactionId),
    Edit(TransactionId),
}

/// What the user currently sees, from the most to the least prominent dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Viewing(TransactionId),
    Editing(TransactionId),
    ConfirmingDelete(TransactionId),
}

/// Tracks the open dialog in each slot.
#[derive(Debug, Default)]
pub struct ModalManager {
    dialog: Option<Dialog>,
    delete: Option<TransactionId>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the read-only dialog, replacing any view or edit dialog.
    pub fn open_view(&mut self, id: TransactionId) {
        self.open_dialog(Dialog::View(id));
    }

    /// Open the edit dialog, replacing any view or edit dialog.
    pub fn open_edit(&mut self, id: TransactionId) {
        self.open_dialog(Dialog::Edit(id));
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        if let Some(previous) = self.dialog.replace(dialog) {
            tracing::debug!("Replaced dialog {previous:?}");
        }
    }

    /// Open the delete confirmation, replacing any other delete confirmation.
    pub fn open_delete(&mut self, id: TransactionId) {
        if let Some(previous) = self.delete.replace(id) {
            tracing::debug!("Replaced delete confirmation for transaction {previous}");
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn close_delete(&mut self) {
        self.delete = None;
    }

    /// Close both slots, returning what was open before.
    pub fn close_all(&mut self) -> DialogState {
        let previous = self.state();
        self.close_dialog();
        self.close_delete();

        previous
    }

    /// The delete confirmation takes precedence since it is drawn on top.
    pub fn state(&self) -> DialogState {
        match (&self.delete, &self.dialog) {
            (Some(id), _) => DialogState::ConfirmingDelete(id.clone()),
            (None, Some(Dialog::View(id))) => DialogState::Viewing(id.clone()),
            (None, Some(Dialog::Edit(id))) => DialogState::Editing(id.clone()),
            (None, None) => DialogState::Closed,
        }
    }
}

/// The HTTP method htmx uses for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HxMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// The htmx request an element makes when triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HxRequest {
    pub method: HxMethod,
    pub url: String,
    /// The CSS selector of the element the response is swapped into.
    pub target: String,
}

impl HxRequest {
    fn url_for(&self, method: HxMethod) -> Option<&str> {
        (self.method == method).then_some(self.url.as_str())
    }

    /// The `hx-get` attribute value.
    pub fn get(&self) -> Option<&str> {
        self.url_for(HxMethod::Get)
    }

    /// The `hx-post` attribute value.
    pub fn post(&self) -> Option<&str> {
        self.url_for(HxMethod::Post)
    }

    /// The `hx-put` attribute value.
    pub fn put(&self) -> Option<&str> {
        self.url_for(HxMethod::Put)
    }

    /// The `hx-delete` attribute value.
    pub fn delete(&self) -> Option<&str> {
        self.url_for(HxMethod::Delete)
    }
}

/// Something the user can do from a table row or a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    View(TransactionId),
    Edit(TransactionId),
    Delete(TransactionId),
    SaveEdit(TransactionId),
    ConfirmDelete(TransactionId),
    CloseDialog,
    CloseDeleteDialog,
}

impl DialogAction {
    pub fn request(&self) -> HxRequest {
        let dialog_slot = id_selector(MODAL_CONTAINER_ID);
        let delete_slot = id_selector(DELETE_MODAL_CONTAINER_ID);

        let (method, url, target) = match self {
            DialogAction::View(id) => (
                HxMethod::Get,
                format_endpoint(endpoints::VIEW_TRANSACTION_DIALOG, id),
                dialog_slot,
            ),
            DialogAction::Edit(id) => (
                HxMethod::Get,
                format_endpoint(endpoints::EDIT_TRANSACTION_DIALOG, id),
                dialog_slot,
            ),
            DialogAction::Delete(id) => (
                HxMethod::Get,
                format_endpoint(endpoints::DELETE_TRANSACTION_DIALOG, id),
                delete_slot,
            ),
            DialogAction::SaveEdit(id) => (
                HxMethod::Put,
                format_endpoint(endpoints::TRANSACTION, id),
                dialog_slot,
            ),
            DialogAction::ConfirmDelete(id) => (
                HxMethod::Delete,
                format_endpoint(endpoints::TRANSACTION, id),
                delete_slot,
            ),
            DialogAction::CloseDialog => {
                (HxMethod::Post, endpoints::CLOSE_DIALOG.to_owned(), dialog_slot)
            }
            DialogAction::CloseDeleteDialog => (
                HxMethod::Post,
                endpoints::CLOSE_DELETE_DIALOG.to_owned(),
                delete_slot,
            ),
        };

        HxRequest {
            method,
            url,
            target,
        }
    }
}

/// A button that performs `action` when clicked.
pub fn action_button(action: &DialogAction, class: &str, title: &str, content: Markup) -> Markup {
    let request = action.request();

    html! {
        button
            type="button"
            title=(title)
            class=(class)
            hx-get=[request.get()]
            hx-post=[request.post()]
            hx-put=[request.put()]
            hx-delete=[request.delete()]
            hx-target=(request.target)
            hx-swap="innerHTML"
        {
            (content)
        }
    }
}

fn dialog_frame(id: &str, class: &str, close: DialogAction, content: Markup) -> Markup {
    html! {
        div id=(id) class=(class) role="dialog" aria-modal="true"
        {
            div class=(MODAL_CONTENT_STYLE)
            {
                (action_button(
                    &close,
                    "close-btn absolute top-2 right-3 text-2xl text-gray-500 hover:text-gray-900",
                    "Close",
                    html! { "×" },
                ))

                (content)
            }
        }
    }
}

fn detail(label: &str, value: Markup) -> Markup {
    html! {
        p { strong { (label) ":" } " " (value) }
    }
}

/// The read-only details of a transaction.
pub fn view_dialog(transaction: &Transaction) -> Markup {
    let content = html! {
        h2 class="text-xl font-semibold" { "Transaction Details" }
        (detail("Description", html! { (transaction.description) }))
        (detail("Category", html! { (transaction.category) }))
        (detail("Amount", html! { (format_amount(transaction.amount)) }))
        (detail("Type", html! { (transaction.type_) }))
        (detail("Date", html! { (transaction.display_date_time()) }))

        (action_button(
            &DialogAction::CloseDialog,
            BUTTON_SECONDARY_STYLE,
            "Close",
            html! { "Close" },
        ))
    };

    dialog_frame(
        "view-dialog",
        MODAL_BACKDROP_STYLE,
        DialogAction::CloseDialog,
        content,
    )
}

/// The edit form, pre-filled with the transaction's current fields.
pub fn edit_dialog(transaction: &Transaction) -> Markup {
    let save = DialogAction::SaveEdit(transaction.id.clone()).request();

    let content = html! {
        h2 class="text-xl font-semibold" { "Edit Transaction" }

        form
            id="edit-form"
            class="space-y-3"
            hx-put=[save.put()]
            hx-target=(save.target)
            hx-swap="innerHTML"
        {
            div
            {
                label for="edit-description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    id="edit-description"
                    name="description"
                    type="text"
                    value=(transaction.description)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="edit-category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="edit-category"
                    name="category"
                    type="text"
                    value=(transaction.category)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="edit-amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="edit-amount"
                    name="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    value=(transaction.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="edit-type" class=(FORM_LABEL_STYLE) { "Type" }
                select id="edit-type" name="type" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for type_ in TransactionType::ALL {
                        option value=(type_.as_str()) selected[type_ == transaction.type_]
                        {
                            (type_.label())
                        }
                    }
                }
            }

            div class="flex gap-3 pt-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
                (action_button(
                    &DialogAction::CloseDialog,
                    BUTTON_SECONDARY_STYLE,
                    "Cancel",
                    html! { "Cancel" },
                ))
            }
        }
    };

    dialog_frame(
        "edit-dialog",
        MODAL_BACKDROP_STYLE,
        DialogAction::CloseDialog,
        content,
    )
}

/// The confirmation shown before a transaction is deleted.
pub fn delete_dialog(transaction: &Transaction) -> Markup {
    let content = html! {
        div class="flex items-center gap-2"
        {
            span class="text-2xl" { "⚠️" }
            h2 class="text-xl font-semibold" { "Delete Transaction" }
        }

        p { "Are you sure you want to delete this transaction?" }

        div class="transaction-preview p-3 rounded border border-gray-200 dark:border-gray-600"
        {
            (detail("Description", html! { (transaction.description) }))
            (detail("Category", html! { (transaction.category) }))
            (detail("Amount", html! {
                span style={ "color: " (transaction.type_.colour()) ";" }
                {
                    (format_amount(transaction.amount))
                }
            }))
            (detail("Type", html! { (transaction.type_) }))
            (detail("Date", html! { (transaction.display_date()) }))
        }

        p class="warning-text text-red-600 font-semibold" { "This action cannot be undone." }

        div class="flex gap-3"
        {
            (action_button(
                &DialogAction::CloseDeleteDialog,
                BUTTON_SECONDARY_STYLE,
                "Cancel",
                html! { "Cancel" },
            ))
            (action_button(
                &DialogAction::ConfirmDelete(transaction.id.clone()),
                BUTTON_DANGER_STYLE,
                "Delete",
                html! { "Delete" },
            ))
        }
    };

    dialog_frame(
        "delete-dialog",
        &format!("{MODAL_BACKDROP_STYLE} delete-modal"),
        DialogAction::CloseDeleteDialog,
        content,
    )
}

/// The state needed to open and close dialogs.
#[derive(Clone)]
pub struct DialogEndpointState {
    pub sync: SyncState,
    pub modals: Arc<Mutex<ModalManager>>,
}

impl FromRef<AppState> for DialogEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sync: SyncState::from_ref(state),
            modals: state.modals.clone(),
        }
    }
}

impl DialogEndpointState {
    /// Run `f` with the modal manager locked.
    ///
    /// # Errors
    /// Returns [Error::LockError] if the lock is poisoned.
    pub fn with_modals<T>(&self, f: impl FnOnce(&mut ModalManager) -> T) -> Result<T, Error> {
        let mut modals = self
            .modals
            .lock()
            .map_err(|_| Error::LockError("dialogs"))?;

        Ok(f(&mut modals))
    }
}

#[derive(Debug, Clone, Copy)]
enum DialogKind {
    View,
    Edit,
    Delete,
}

fn open_dialog(
    state: &DialogEndpointState,
    kind: DialogKind,
    id: TransactionId,
) -> Result<Markup, Error> {
    let transaction = state
        .sync
        .find_transaction(&id)?
        .ok_or_else(|| Error::TransactionNotFound(id.clone()))?;

    let markup = match kind {
        DialogKind::View => view_dialog(&transaction),
        DialogKind::Edit => edit_dialog(&transaction),
        DialogKind::Delete => delete_dialog(&transaction),
    };

    state.with_modals(|modals| match kind {
        DialogKind::View => modals.open_view(id),
        DialogKind::Edit => modals.open_edit(id),
        DialogKind::Delete => modals.open_delete(id),
    })?;

    Ok(markup)
}

fn open_dialog_endpoint(
    state: DialogEndpointState,
    kind: DialogKind,
    transaction_id: String,
) -> Response {
    match open_dialog(&state, kind, TransactionId::new(transaction_id)) {
        Ok(markup) => markup.into_response(),
        Err(error) => error.into_toast_response(&state.sync.toasts),
    }
}

/// A route handler that opens the read-only dialog for a transaction.
pub async fn get_view_dialog(
    State(state): State<DialogEndpointState>,
    Path(transaction_id): Path<String>,
) -> Response {
    open_dialog_endpoint(state, DialogKind::View, transaction_id)
}

/// A route handler that opens the edit dialog for a transaction.
pub async fn get_edit_dialog(
    State(state): State<DialogEndpointState>,
    Path(transaction_id): Path<String>,
) -> Response {
    open_dialog_endpoint(state, DialogKind::Edit, transaction_id)
}

/// A route handler that opens the delete confirmation for a transaction.
pub async fn get_delete_dialog(
    State(state): State<DialogEndpointState>,
    Path(transaction_id): Path<String>,
) -> Response {
    open_dialog_endpoint(state, DialogKind::Delete, transaction_id)
}

/// A route handler that closes the view/edit dialog, responds with an empty slot.
pub async fn close_dialog_endpoint(State(state): State<DialogEndpointState>) -> Response {
    match state.with_modals(ModalManager::close_dialog) {
        Ok(()) => Html("").into_response(),
        Err(error) => error.into_toast_response(&state.sync.toasts),
    }
}

/// A route handler that closes the delete confirmation, responds with an empty slot.
pub async fn close_delete_dialog_endpoint(State(state): State<DialogEndpointState>) -> Response {
    match state.with_modals(ModalManager::close_delete) {
        Ok(()) => Html("").into_response(),
        Err(error) => error.into_toast_response(&state.sync.toasts),
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        modal::{
            DialogAction, DialogState, HxMethod, ModalManager, delete_dialog, edit_dialog,
            view_dialog,
        },
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
        transaction::{TransactionId, TransactionType, test_utils::transaction},
    };

    fn text_of(html: &Html) -> String {
        html.root_element().text().collect::<String>()
    }

    #[test]
    fn view_then_edit_leaves_only_edit() {
        let mut modals = ModalManager::new();
        let id = TransactionId::new("1");

        modals.open_view(id.clone());
        modals.open_edit(id.clone());

        assert_eq!(modals.state(), DialogState::Editing(id));
    }

    #[test]
    fn close_all_empties_both_slots() {
        let mut modals = ModalManager::new();
        modals.open_edit(TransactionId::new("1"));
        modals.open_delete(TransactionId::new("2"));

        let previous = modals.close_all();

        assert_eq!(
            previous,
            DialogState::ConfirmingDelete(TransactionId::new("2"))
        );
        assert_eq!(modals.state(), DialogState::Closed);
        assert_eq!(modals.close_all(), DialogState::Closed);
    }

    #[test]
    fn delete_slot_is_independent_of_dialog_slot() {
        let mut modals = ModalManager::new();

        modals.open_view(TransactionId::new("1"));
        modals.open_delete(TransactionId::new("2"));
        modals.open_delete(TransactionId::new("3"));

        assert_eq!(
            modals.state(),
            DialogState::ConfirmingDelete(TransactionId::new("3"))
        );

        modals.close_delete();
        assert_eq!(
            modals.state(),
            DialogState::Viewing(TransactionId::new("1"))
        );

        modals.close_dialog();
        assert_eq!(modals.state(), DialogState::Closed);
    }

    #[test]
    fn actions_target_their_slot() {
        let id = TransactionId::new("7");

        let view = DialogAction::View(id.clone()).request();
        assert_eq!(view.method, HxMethod::Get);
        assert_eq!(view.get(), Some("/transactions/7/view"));
        assert_eq!(view.put(), None);
        assert_eq!(view.target, "#modal-container");

        let confirm = DialogAction::ConfirmDelete(id.clone()).request();
        assert_eq!(confirm.delete(), Some("/transactions/7"));
        assert_eq!(confirm.get(), None);
        assert_eq!(confirm.target, "#delete-modal-container");

        let save = DialogAction::SaveEdit(id).request();
        assert_eq!(save.put(), Some("/transactions/7"));

        let close = DialogAction::CloseDeleteDialog.request();
        assert_eq!(close.post(), Some(endpoints::CLOSE_DELETE_DIALOG));
    }

    #[test]
    fn view_dialog_shows_details_with_date_time() {
        let transaction = transaction("1", "Coffee", 4.5, TransactionType::Expense);

        let html = Html::parse_fragment(&view_dialog(&transaction).into_string());
        assert_valid_html(&html);

        let text = text_of(&html);
        for want in [
            "Transaction Details",
            "Coffee",
            "Food",
            "4.50 USD",
            "expense",
            "2025-10-26 14:05",
        ] {
            assert!(text.contains(want), "want {want:?} in view dialog, got {text:?}");
        }
    }

    #[test]
    fn edit_dialog_is_prefilled() {
        let transaction = transaction("1", "Coffee", 4.5, TransactionType::Expense);

        let html = Html::parse_fragment(&edit_dialog(&transaction).into_string());
        assert_valid_html(&html);

        let form = must_get_form(&html, "edit-form");
        assert_hx_endpoint(&form, "/transactions/1", "hx-put");
        assert_form_input_with_value(&form, "description", "text", "Coffee");
        assert_form_input_with_value(&form, "category", "text", "Food");
        assert_form_input_with_value(&form, "amount", "number", "4.5");
        assert_form_submit_button_with_text(&form, "Save Changes");

        let selected_type = form
            .select(&Selector::parse("select[name=type] option[selected]").unwrap())
            .next()
            .expect("want a selected type");
        assert_eq!(selected_type.value().attr("value"), Some("expense"));
    }

    #[test]
    fn delete_dialog_previews_transaction_and_warns() {
        let transaction = transaction("1", "Coffee", 4.5, TransactionType::Expense);

        let html = Html::parse_fragment(&delete_dialog(&transaction).into_string());
        assert_valid_html(&html);

        let text = text_of(&html);
        for want in [
            "Coffee",
            "Food",
            "4.50 USD",
            "2025-10-26",
            "This action cannot be undone.",
        ] {
            assert!(text.contains(want), "want {want:?} in delete dialog, got {text:?}");
        }

        let confirm = html
            .select(&Selector::parse("button[hx-delete]").unwrap())
            .next()
            .expect("want a confirm button");
        assert_eq!(confirm.value().attr("hx-delete"), Some("/transactions/1"));
        assert_eq!(
            confirm.value().attr("hx-target"),
            Some("#delete-modal-container")
        );
    }
}
