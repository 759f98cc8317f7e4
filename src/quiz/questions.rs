use crate::quiz;

/// The fixed placement test. Three questions about СУПРИМ basics; two or more
/// correct answers already count as the advanced tier.
pub fn placement_questions() -> Vec<quiz::Question> {
    vec![
        quiz::Question::new(
            "Что такое СУПРИМ?".to_string(),
            vec![
                "CRM система".to_string(),
                "ПО для управления проектами".to_string(),
                "Система документооборота".to_string(),
                "ERP система".to_string(),
            ],
            1,
        ),
        quiz::Question::new(
            "Как создать новый проект в СУПРИМ?".to_string(),
            vec![
                "Файл > Новый".to_string(),
                "Проекты > Создать".to_string(),
                "Главная > Добавить".to_string(),
                "Настройки > Проект".to_string(),
            ],
            1,
        ),
        quiz::Question::new(
            "Где находятся отчёты в СУПРИМ?".to_string(),
            vec![
                "Главная панель".to_string(),
                "Модуль отчётности".to_string(),
                "Настройки".to_string(),
                "Файлы".to_string(),
            ],
            1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_questions_with_four_options_each() {
        let questions = placement_questions();
        assert_eq!(questions.len(), 3);
        for question in &questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.correct < question.options.len());
            assert!(!question.prompt.is_empty());
        }
    }
}
