// Transient notifications: every mutating action either toasts success and
// refreshes its view, or toasts the failure and changes nothing.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, PartialEq, Default)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.items.push(toast),
            ToastAction::Dismiss(id) => next.items.retain(|toast| toast.id != id),
        }
        next.into()
    }
}

/// Handle for pushing notifications from anywhere under the provider.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    push: Callback<(ToastKind, String)>,
}

impl Toasts {
    pub fn success(&self, text: impl Into<String>) {
        self.push.emit((ToastKind::Success, text.into()));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push.emit((ToastKind::Error, text.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let list = list.clone();
        Callback::from(move |(kind, text): (ToastKind, String)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter += 1;
                *counter
            };
            list.dispatch(ToastAction::Push(Toast { id, kind, text }));
            let list = list.clone();
            Timeout::new(TOAST_DISMISS_MS, move || {
                list.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let handle = Toasts { push };

    html! {
        <ContextProvider<Toasts> context={handle}>
            { props.children.clone() }
            <div class="toast-stack">
                { for list.items.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    html! { <div key={toast.id} {class}>{ &toast.text }</div> }
                }) }
            </div>
        </ContextProvider<Toasts>>
    }
}

#[hook]
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("use_toasts called outside ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, kind: ToastKind, text: &str) -> Toast {
        Toast {
            id,
            kind,
            text: text.into(),
        }
    }

    #[test]
    fn dismiss_removes_only_its_toast() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast(1, ToastKind::Success, "saved")));
        let list = list.reduce(ToastAction::Push(toast(2, ToastKind::Error, "In use")));
        assert_eq!(list.items.len(), 2);

        let list = list.reduce(ToastAction::Dismiss(1));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "In use");
    }
}
