//! Built-in tutorial content.

use crate::model::{
    Celebration, IconKey, StepDefinition, StepError, StepId, Tutorial, TutorialDraft,
    TutorialError,
};

/// The handmade New Year ornament tutorial (8th grade technology class).
///
/// # Errors
///
/// Returns `TutorialError` if the built-in data fails validation.
pub fn ornament_tutorial() -> Result<Tutorial, TutorialError> {
    TutorialDraft {
        title: "Новогодний шар своими руками".to_string(),
        subtitle: "Пошаговая инструкция по созданию праздничного украшения для урока технологии в 8 классе".to_string(),
        duration_label: "Время работы: 2-3 часа".to_string(),
        hero_emoji: "🎄".to_string(),
        steps: ornament_steps()?,
        safety_title: "Техника безопасности".to_string(),
        safety_rules: vec![
            "Работайте с горячим клеем под присмотром учителя".to_string(),
            "Используйте ножницы аккуратно, передавайте кольцами вперёд".to_string(),
            "Проветривайте помещение при работе с лаком".to_string(),
            "Убирайте рабочее место после завершения работы".to_string(),
        ],
        celebration: Celebration {
            emoji: "🎉".to_string(),
            headline: "Поздравляем! Вы завершили все этапы!".to_string(),
            message: "Ваш новогодний шар готов украсить праздник!".to_string(),
        },
    }
    .validate()
}

fn ornament_steps() -> Result<Vec<StepDefinition>, StepError> {
    Ok(vec![
        StepDefinition::new(
            StepId::new(1),
            "Подготовка материалов",
            "Соберите всё необходимое для создания шара",
            [
                "Пенопластовая основа (шар диаметром 8-10 см)",
                "Нитки или пряжа (цветные, можно разных оттенков)",
                "Клей ПВА или горячий клей",
                "Декоративные элементы: бусины, пайетки, ленты",
                "Ножницы",
                "Кисточка для клея",
            ],
            "Выбирайте контрастные цвета ниток для более яркого результата!",
            IconKey::Package,
        )?,
        StepDefinition::new(
            StepId::new(2),
            "Обмотка основы",
            "Создание базового покрытия шара",
            [
                "Нанесите клей на небольшой участок шара",
                "Начните обматывать нитками от верхушки",
                "Наматывайте нитки плотно, без просветов",
                "Меняйте направление намотки для прочности",
                "Периодически добавляйте клей",
                "Покройте всю поверхность шара",
            ],
            "Работайте аккуратно, не спешите! Равномерная намотка — залог красивого результата.",
            IconKey::Wind,
        )?,
        StepDefinition::new(
            StepId::new(3),
            "Декорирование",
            "Украшение шара декоративными элементами",
            [
                "Дайте клею полностью высохнуть (1-2 часа)",
                "Приклейте бусины или пайетки",
                "Добавьте ленточки или кружево",
                "Можно использовать блёстки",
                "Создайте узор или абстрактную композицию",
                "Закрепите петельку для подвешивания",
            ],
            "Используйте горячий клей для надёжной фиксации декора!",
            IconKey::Sparkles,
        )?,
        StepDefinition::new(
            StepId::new(4),
            "Финальная отделка",
            "Завершающие штрихи",
            [
                "Проверьте прочность всех элементов",
                "Добавьте лак или спрей-блеск (по желанию)",
                "Закрепите атласную ленту для подвешивания",
                "Можно добавить искусственный снег",
                "Проверьте баланс шара при подвешивании",
            ],
            "Дайте всем элементам полностью высохнуть перед использованием!",
            IconKey::Star,
        )?,
    ])
}
