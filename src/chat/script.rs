use crate::chat::responder::{ReplyRule, Responder};

/// Opening message of every support chat.
pub const GREETING: &str = "Привет! Я ваш AI-помощник по системе СУПРИМ. Могу помочь с изучением функций, ответить на вопросы или показать, как выполнить нужную операцию. Что вас интересует?";

/// Reply when no keyword matches.
pub const FALLBACK_REPLY: &str = "Отличный вопрос! Я помогу вам разобраться с этим. В СУПРИМ есть множество функций, и я готов объяснить любую из них подробно. Можете задать более конкретный вопрос?";

/// Quick-start questions offered while the chat is still empty.
pub fn suggestions() -> Vec<String> {
    vec![
        "Как создать проект в СУПРИМ?".to_string(),
        "Где найти отчёты?".to_string(),
        "Как добавить пользователя?".to_string(),
        "Настройка уведомлений".to_string(),
    ]
}

/// Keyword table of the СУПРИМ support script. Order matters: the first
/// matching keyword decides the reply. The stems "пользовател" and
/// "уведомлен" are truncated on purpose so inflected forms still match.
pub fn reply_rules() -> Vec<ReplyRule> {
    vec![
        ReplyRule::new(
            "проект",
            "Для создания нового проекта:\n1. Перейдите в раздел 'Проекты'\n2. Нажмите кнопку 'Создать новый'\n3. Заполните название и описание\n4. Выберите участников команды\n5. Настройте параметры и нажмите 'Сохранить'",
        ),
        ReplyRule::new(
            "отчёт",
            "Отчёты находятся в модуле 'Отчётность':\n• Стандартные отчёты - готовые шаблоны\n• Пользовательские - создавайте свои\n• Экспорт в Excel, PDF\n• Автоматическая рассылка по расписанию",
        ),
        ReplyRule::new(
            "пользовател",
            "Управление пользователями:\n1. Админ панель → 'Пользователи'\n2. 'Добавить пользователя'\n3. Укажите роль и права доступа\n4. Отправьте приглашение\n\nДоступные роли: Администратор, Менеджер, Пользователь",
        ),
        ReplyRule::new(
            "уведомлен",
            "Настройка уведомлений:\n• Профиль → Уведомления\n• Email, SMS, Push\n• Настройте частоту\n• Выберите типы событий\n• Рабочие часы для отправки",
        ),
    ]
}

/// The assistant as shipped: the СУПРИМ script plus the generic fallback.
pub fn suprim_responder() -> Responder {
    Responder::new(reply_rules(), FALLBACK_REPLY)
}
