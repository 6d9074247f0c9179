use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;
use std::time::Duration;

pub const ATTENDANCE_MESSAGE: &str = "✅ تم تسجيل الحضور بنجاح!";
pub const ATTENDANCE_DISMISS: Duration = Duration::from_secs(5);

/// Attendance confirmation: the button appends a success message to the
/// container and removes it again after a fixed delay.
#[component]
pub fn AttendanceNotifier() -> impl IntoView {
    let (message_visible, set_message_visible) = signal(false);
    let dismiss_handle: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    let register_attendance = move |_| {
        set_message_visible(true);

        // a re-click restarts the full dismiss window
        if let Some(handle) = dismiss_handle.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || set_message_visible(false),
            ATTENDANCE_DISMISS,
        )
        .expect("Failed to set timeout");
        dismiss_handle.set_value(Some(handle));
    };

    view! {
        <div class="container mx-auto p-4 flex flex-col items-center">
            <button
                class="bg-teal-500 hover:bg-teal-600 text-white font-bold py-2 px-4 rounded transition-colors"
                on:click=register_attendance
            >
                "تسجيل الحضور"
            </button>
            <Show when=move || message_visible.get()>
                <p class="text-green-600 mt-4">{ATTENDANCE_MESSAGE}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text_is_fixed() {
        assert_eq!(ATTENDANCE_MESSAGE, "✅ تم تسجيل الحضور بنجاح!");
    }

    #[test]
    fn test_dismiss_delay_is_five_seconds() {
        assert_eq!(ATTENDANCE_DISMISS, Duration::from_secs(5));
    }
}
