//! Prompt text sent to the language model.

use weatherlab_physics::{PhysicsParameters, WeatherOutput};

use crate::sections::SECTION_HEADERS;

/// Prompt asking for the six-section explanation.
pub fn summary_prompt(params: &PhysicsParameters, output: &WeatherOutput) -> String {
    format!(
        "You are an expert climate physicist.

User changed the following physics parameters:
- Gravity: {gravity}x Earth gravity (normal = 1.0)
- Air Density: {air_density} kg/m³ (normal = 1.225)
- Pressure: {pressure} mb (normal = 1013)
- CO₂: {co2} ppm (normal = 400)
- Sunlight: {sunlight}x normal intensity
- Humidity: {humidity}%
- Wind Drag: {wind_drag}x
- Cloud Condensation: {cloud_condensation}x

This resulted in:
- Temperature: {temperature}°C
- Cloud Altitude: {cloud_altitude}m
- Rain Chance: {precipitation}%
- Wind Speed: {wind_speed} km/h
- Storm Probability: {storm}%
- Evaporation Rate: {evaporation} mm/day
- Visibility: {visibility} km
- Human Comfort: {comfort}/100

Explain the resulting weather in EXACTLY this format (use clear section headers):

{h1}
[2-3 sentences for general audience explaining the main weather changes]

{h2}
[Detailed physics reasoning about why these changes occurred]

{h3}
[Effects on plants, humans, and animals in these conditions]

{h4}
[Vivid, sensory description of what it would be like to experience this weather]

{h5}
[Potential dangers or unusual effects - be specific about safety concerns]

{h6}
[Interesting trivia related to these physics changes]

Keep each section concise but informative. Use engaging language.",
        gravity = params.gravity,
        air_density = params.air_density,
        pressure = params.pressure,
        co2 = params.co2,
        sunlight = params.sunlight,
        humidity = params.humidity,
        wind_drag = params.wind_drag,
        cloud_condensation = params.cloud_condensation,
        temperature = output.temperature,
        cloud_altitude = output.cloud_altitude,
        precipitation = output.precipitation_chance,
        wind_speed = output.wind_speed,
        storm = output.storm_probability,
        evaporation = output.evaporation_rate,
        visibility = output.visibility,
        comfort = output.comfort_index,
        h1 = SECTION_HEADERS[0],
        h2 = SECTION_HEADERS[1],
        h3 = SECTION_HEADERS[2],
        h4 = SECTION_HEADERS[3],
        h5 = SECTION_HEADERS[4],
        h6 = SECTION_HEADERS[5],
    )
}

/// Prompt answering a free-form question about the current simulation.
pub fn chat_prompt(question: &str, params: &PhysicsParameters, output: &WeatherOutput) -> String {
    format!(
        "You are an expert climate physicist assistant.

Current Simulation Parameters:
- Gravity: {gravity}x
- Pressure: {pressure} mb
- Sunlight: {sunlight}x
- CO2: {co2} ppm
- Humidity: {humidity}%
- Air Density: {air_density} kg/m³

Current Weather Output:
- Temperature: {temperature}°C
- Rain Chance: {precipitation}%
- Wind Speed: {wind_speed} km/h
- Storm Risk: {storm}%

User Question: \"{question}\"

Answer the user's question based on the current simulation state. Be concise, scientific, yet accessible. If the question is unrelated to the simulation or weather physics, politely steer the conversation back to the topic.",
        gravity = params.gravity,
        pressure = params.pressure,
        sunlight = params.sunlight,
        co2 = params.co2,
        humidity = params.humidity,
        air_density = params.air_density,
        temperature = output.temperature,
        precipitation = output.precipitation_chance,
        wind_speed = output.wind_speed,
        storm = output.storm_probability,
        question = question.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherlab_physics::evaluate;

    #[test]
    fn test_summary_prompt_lists_inputs_and_outputs() {
        let params = PhysicsParameters::EARTH;
        let output = evaluate(params);
        let prompt = summary_prompt(&params, &output);

        assert!(prompt.contains("- Gravity: 1x Earth gravity"));
        assert!(prompt.contains("- Air Density: 1.225 kg/m³"));
        assert!(prompt.contains("- Temperature: 16.4°C"));
        assert!(prompt.contains("- Human Comfort: 77/100"));
    }

    #[test]
    fn test_summary_prompt_requests_every_section() {
        let params = PhysicsParameters::EARTH;
        let prompt = summary_prompt(&params, &evaluate(params));
        for header in SECTION_HEADERS {
            assert!(prompt.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_chat_prompt_quotes_question() {
        let params = PhysicsParameters::EARTH;
        let prompt = chat_prompt("  Why is it windy?  ", &params, &evaluate(params));
        assert!(prompt.contains("User Question: \"Why is it windy?\""));
        assert!(prompt.contains("- Storm Risk: 9%"));
    }
}
