/// Prompt construction for the chat-completions call

use crate::models::{ItineraryRequest, RouteKind};

/// System instruction for the structured itinerary endpoint
pub const ITINERARY_SYSTEM_PROMPT: &str = "Eres un asistente útil que responde solo en JSON.";

/// System instruction for the raw-prompt relay endpoint
pub const ROUTE_SYSTEM_PROMPT: &str =
    "Eres un asistente de creación de rutas turísticas útil que responde solo en JSON.";

/// Build the user message for a structured itinerary request
///
/// The model is told to answer with a JSON object only: a `dias` list of
/// day objects whose `paradas` begin at the effective origin. Free-text
/// fields are interpolated as-is; the model is expected to tolerate them.
pub fn build_itinerary_prompt(req: &ItineraryRequest) -> String {
    let origin = req.effective_origin();
    let framing = match req.route_type {
        RouteKind::Circular => "CIRCULAR (acaba donde empieza)",
        RouteKind::Linear => "LINEAL (ve de punto A a punto B)",
    };

    format!(
        r#"Eres un guía experto. Crea un itinerario de {days} día(s) en {location}.
Intereses: "{interest}".
Duración por día: {minutes} minutos.
Inicio obligatorio cada día: "{origin}".
Tipo de ruta: {framing}.

IMPORTANTE: Devuelve SOLO un JSON válido con esta estructura, sin texto extra:
{{
    "dias": [
        {{
            "dia": 1,
            "titulo": "Nombre de la zona",
            "historia": "Breve descripción con emojis",
            "paradas": ["{origin}", "Lugar 1", "Lugar 2", "Fin"]
        }}
    ]
}}"#,
        days = req.days(),
        location = req.location,
        interest = req.interest,
        minutes = req.duration_minutes(),
        origin = origin,
        framing = framing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> ItineraryRequest {
        serde_json::from_str(body).expect("valid request body")
    }

    #[test]
    fn circular_route_is_framed_as_circular() {
        let prompt = build_itinerary_prompt(&request(
            r#"{"location":"Sevilla","interest":"tapas","routeType":"circular"}"#,
        ));
        assert!(prompt.contains("CIRCULAR"));
        assert!(!prompt.contains("LINEAL"));
    }

    #[test]
    fn any_other_route_type_is_framed_as_lineal() {
        let absent = build_itinerary_prompt(&request(r#"{"location":"Sevilla","interest":"t"}"#));
        assert!(absent.contains("LINEAL"));

        let unknown = build_itinerary_prompt(&request(
            r#"{"location":"Sevilla","interest":"t","routeType":"loop"}"#,
        ));
        assert!(unknown.contains("LINEAL"));
    }

    #[test]
    fn mandatory_start_uses_exact_location_when_present() {
        let prompt = build_itinerary_prompt(&request(
            r#"{"location":"Sevilla","interest":"t","exactLocation":"Plaza de España"}"#,
        ));
        assert!(prompt.contains(r#"Inicio obligatorio cada día: "Plaza de España"."#));
        assert!(prompt.contains(r#""paradas": ["Plaza de España""#));
    }

    #[test]
    fn mandatory_start_falls_back_to_location() {
        let prompt =
            build_itinerary_prompt(&request(r#"{"location":"Sevilla","interest":"t"}"#));
        assert!(prompt.contains(r#"Inicio obligatorio cada día: "Sevilla"."#));
    }

    #[test]
    fn numbers_are_embedded_as_plain_integers() {
        let prompt = build_itinerary_prompt(&request(
            r#"{"location":"Sevilla","interest":"t","duration":90,"daysCount":2}"#,
        ));
        assert!(prompt.contains("90 minutos"));
        assert!(prompt.contains("2 día(s)"));
    }

    #[test]
    fn defaults_reach_the_prompt_text() {
        let prompt =
            build_itinerary_prompt(&request(r#"{"location":"Sevilla","interest":"t"}"#));
        assert!(prompt.contains("120 minutos"));
        assert!(prompt.contains("1 día(s)"));
    }
}
