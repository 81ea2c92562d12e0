use crate::ports::AssistantResponderPort;

/// Canned keyword-matching responder.
///
/// Rules are checked in order; the first match wins.
#[derive(Debug, Default, Clone)]
pub struct KeywordAssistantResponder;

impl KeywordAssistantResponder {
    pub fn new() -> Self {
        Self
    }
}

impl AssistantResponderPort for KeywordAssistantResponder {
    fn respond(&self, question: &str) -> String {
        let q = question.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| q.contains(n));

        if has(&["протек", "течет"]) {
            let ticket: u32 = rand::random_range(0..1000);
            return format!(
                "Понял, протечка — это срочно! Я уже создаю заявку для сантехника. Пока мастер в пути, перекройте воду, если возможно. Заявка №{ticket} создана."
            );
        }
        if has(&["свет", "электр"]) {
            return "Проблема с электричеством зафиксирована. Создаю заявку электрику. Проверьте, пожалуйста, автоматы в щитке. Заявка создана!".to_string();
        }
        if has(&["оплат"]) {
            return "Оплатить коммуналку можно в разделе \"Платежи\". Принимаем карты, Apple Pay и Google Pay. Хотите, чтобы я настроил автоплатёж?".to_string();
        }
        if has(&["вод", "отключ"]) {
            return "По плану отключение воды 12 января с 9:00 до 15:00. Я отправлю напоминание накануне!".to_string();
        }
        "Спасибо за вопрос! Я передам его в управляющую компанию. Обычно отвечают в течение часа. Могу чем-то ещё помочь?".to_string()
    }
}
