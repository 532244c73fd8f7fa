//! User-facing texts. The bot serves Ukrainian-speaking users near the front line.

pub const START: &str = "Вітаємо! Я бот підтримки для осіб, що перебувають у прифронтовій зоні. Ось деякі команди:\n\
/situation - Поточна ситуація\n\
/resources - Доступні ресурси та послуги\n\
/communicate - Спілкування\n\
/safety - Інформація про безпеку\n\
/other - Інші ресурси";

pub const SITUATION: &str = "Поточна ситуація в прифронтовій зоні:\n\
1. Розташування бомбосховищ: ...\n\
2. Маршрути евакуації: ...\n\
3. Інші важливі дані: ...";

pub const RESOURCES: &str = "Доступні ресурси:\n\
1. Медична допомога: ...\n\
2. Психологічна підтримка: ...\n\
3. Правова допомога: ...";

pub const SAFETY: &str = "Інформація про безпеку:\n\
1. Як залишатися в безпеці: ...\n\
2. Як уникати обстрілів: ...\n\
3. Як знайти бомбосховище: ...";

pub const OTHER: &str = "Інші ресурси:\n\
1. Карти: ...\n\
2. Новини: ...\n\
3. Погода: ...";

pub const COMMUNICATE_PROMPT: &str = "Спілкування:";
pub const BUTTON_SHOW_PEERS: &str = "Спілкуйтеся з іншими людьми в прифронтовій зоні";
pub const BUTTON_SUPPORT: &str = "Спілкуйтеся з тими, хто підтримує";
pub const SUPPORT_UNAVAILABLE: &str = "Підтримка наразі недоступна. Спробуйте пізніше.";

pub const CHOOSE_PEER: &str = "Оберіть користувача:";
pub const NO_PEERS: &str = "Наразі немає доступних користувачів для спілкування.";
pub const PEER_UNAVAILABLE: &str = "Цей користувач наразі недоступний.";
pub const INVALID_SELECTION: &str =
    "Не вдалося розпізнати вибір. Спробуйте ще раз через /communicate.";

pub const SEND_USAGE: &str = "Формат: /send <user_id> <повідомлення>.";
pub const TARGET_NOT_FOUND: &str = "Користувач не знайдений.";

/// Instruction shown after a peer is picked from the menu.
pub fn peer_selected(peer_label: &str, peer_id: i64) -> String {
    format!(
        "Ви обрали {}. Напишіть /send {} <повідомлення> для зв'язку.",
        peer_label, peer_id
    )
}

/// Body delivered to the relay target.
pub fn relayed_message(sender_label: &str, body: &str) -> String {
    format!("Повідомлення від {}: {}", sender_label, body)
}

/// Confirmation shown to the sender after delivery.
pub fn relay_confirmation(target_label: &str) -> String {
    format!("Повідомлення надіслано користувачу {}.", target_label)
}
