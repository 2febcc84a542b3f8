//! Templated explanation used when no language model is available.

use weatherlab_physics::{PhysicsParameters, WeatherOutput};

use crate::sections::NarrativeSections;

/// Build a deterministic explanation from thresholds on the inputs and outputs.
pub fn fallback_sections(params: &PhysicsParameters, output: &WeatherOutput) -> NarrativeSections {
    NarrativeSections {
        summary: summary(params, output),
        scientific: scientific(params),
        biological: biological(params, output),
        comfort_index: output.comfort_index,
        day_feeling: day_feeling(params, output),
        risks: risks(params, output),
        fun_fact: fun_fact(params),
    }
}

fn summary(params: &PhysicsParameters, output: &WeatherOutput) -> String {
    let trend = if output.temperature > 25.0 {
        "significantly warmer"
    } else {
        "cooler"
    };
    format!(
        "With {}x gravity and {}x sunlight, the weather becomes {} with {}% chance of rain.",
        params.gravity, params.sunlight, trend, output.precipitation_chance
    )
}

fn scientific(params: &PhysicsParameters) -> String {
    let greenhouse = if params.co2 > 400.0 {
        "increases"
    } else {
        "decreases"
    };
    format!(
        "The modified gravity ({}x Earth normal) affects atmospheric pressure distribution and cloud formation. \
         Combined with {} ppm CO₂, this creates a greenhouse effect that {} surface temperatures. \
         The air density of {} kg/m³ influences wind patterns and heat retention.",
        params.gravity, params.co2, greenhouse, params.air_density
    )
}

fn biological(params: &PhysicsParameters, output: &WeatherOutput) -> String {
    let plants = if params.gravity < 1.0 {
        "easier growth due to reduced gravitational stress"
    } else {
        "stunted growth from increased weight"
    };
    let humans = if output.comfort_index > 70 {
        "comfortable"
    } else {
        "uncomfortable"
    };
    let flight = if params.air_density < 1.0 {
        "fly more easily"
    } else {
        "struggle with flight"
    };
    format!(
        "Plants would experience {}. Humans would feel {} in these conditions. Insects and birds would {}.",
        plants, humans, flight
    )
}

fn day_feeling(params: &PhysicsParameters, output: &WeatherOutput) -> String {
    let feel = if output.temperature > 30.0 {
        "hot and oppressive"
    } else if output.temperature < 10.0 {
        "cold and crisp"
    } else {
        "pleasant"
    };
    let wind = if output.wind_speed > 20.0 {
        "make it feel cooler"
    } else {
        "be barely noticeable"
    };
    let air = if params.humidity > 70.0 {
        "High humidity would make it feel sticky."
    } else {
        "Low humidity would make the air feel dry."
    };
    format!(
        "Your day would feel {}. The {} km/h winds would {}. {}",
        feel, output.wind_speed, wind, air
    )
}

fn risks(params: &PhysicsParameters, output: &WeatherOutput) -> String {
    let storm = if output.storm_probability > 60.0 {
        "⚠️ High storm risk! Seek shelter."
    } else if output.storm_probability > 30.0 {
        "Moderate storm chance - stay alert."
    } else {
        "Low storm risk."
    };
    let gravity = if params.gravity < 0.5 {
        "⚠️ Extreme low gravity - objects and people could float away!"
    } else if params.gravity > 2.0 {
        "⚠️ High gravity - movement would be extremely difficult!"
    } else {
        ""
    };
    let heat = if output.temperature > 40.0 {
        "⚠️ Dangerous heat levels!"
    } else if output.temperature < -10.0 {
        "⚠️ Freezing conditions!"
    } else {
        ""
    };

    [storm, gravity, heat]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn fun_fact(params: &PhysicsParameters) -> String {
    let fact = if params.gravity < 1.0 {
        "On the Moon (0.16x Earth gravity), clouds would rise 6x higher!"
    } else if params.sunlight > 1.5 {
        "If Earth received 50% more sunlight, our oceans would eventually boil!"
    } else if params.co2 > 1000.0 {
        "At 1000+ ppm CO₂, humans experience drowsiness and reduced cognitive function!"
    } else {
        "Earth's weather is a delicate balance of countless factors!"
    };
    format!("Did you know? {}", fact)
}
