use maud::{DOCTYPE, Markup, PreEscaped, html};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2.5 px-5 mb-2 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

pub const BUTTON_DANGER_STYLE: &str = "w-full px-4 py-2 bg-red-600 \
    dark:bg-red-700 hover:bg-red-700 hover:dark:bg-red-800 text-white rounded";

pub const ACTION_BUTTON_STYLE: &str = "action-btn px-1 text-lg bg-transparent \
    border-none cursor-pointer hover:scale-110 transition";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Dialog styles
pub const MODAL_BACKDROP_STYLE: &str = "modal fixed inset-0 z-40 flex items-center \
    justify-center bg-black/50";

pub const MODAL_CONTENT_STYLE: &str = "modal-content relative w-full max-w-md p-6 \
    space-y-3 rounded-lg shadow bg-white text-gray-900 dark:bg-gray-800 dark:text-white";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

/// The ID of the element that holds the view/edit dialog.
pub const MODAL_CONTAINER_ID: &str = "modal-container";
/// The ID of the element that holds the delete confirmation dialog.
pub const DELETE_MODAL_CONTAINER_ID: &str = "delete-modal-container";
/// The ID of the element that holds the current toast.
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Let htmx swap error responses so out-of-band toasts still land.
///
/// Error responses carry `HX-Reswap: none`, so only their out-of-band
/// fragments are applied.
const HTMX_CONFIG: &str = r#"{
    "responseHandling": [
        {"code": "204", "swap": false},
        {"code": "[23]..", "swap": true},
        {"code": "[45]..", "swap": true, "error": true}
    ]
}"#;

/// Where a fragment ends up in an htmx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Part of a full page or the request's main swap target.
    Inline,
    /// Swapped in by element ID, outside the request's target.
    OutOfBand,
}

impl Placement {
    /// The value of the `hx-swap-oob` attribute, if any.
    pub fn swap_oob(self) -> Option<&'static str> {
        match self {
            Placement::Inline => None,
            Placement::OutOfBand => Some("true"),
        }
    }
}

/// The CSS selector form of an element ID, e.g. "#toast-container".
pub fn id_selector(id: &str) -> String {
    format!("#{id}")
}

pub fn base(title: &str, content: &Markup) -> Markup {
    base_with_toast(title, content, None)
}

/// Like [base], with `toast` already placed in the toast container.
pub fn base_with_toast(title: &str, content: &Markup, toast: Option<Markup>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="htmx-config" content=(HTMX_CONFIG);
                title { (title) " - Finance Tracker" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js" {}

                style
                {
                    (PreEscaped(r#"
                    .toast {
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .toast.show {
                        opacity: 1;
                    }

                    tr {
                        transition: opacity 0.5s ease;
                    }
                    "#))
                }

                script src="/static/app.js" defer {}
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                div id=(MODAL_CONTAINER_ID) {}
                div id=(DELETE_MODAL_CONTAINER_ID) {}

                div
                    id=(TOAST_CONTAINER_ID)
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {
                    @if let Some(toast) = toast {
                        (toast)
                    }
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &content)
}
