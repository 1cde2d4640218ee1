pub mod change_notifier;

pub use change_notifier::{ChangeNotifier, SilentNotifier};
