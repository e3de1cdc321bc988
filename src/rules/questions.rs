//! Question rules and their handlers.
//!
//! Handlers are where resolution errors become answer text: each one turns
//! its resolver's `Result` into exactly one line, so nothing below the
//! dispatcher ever fails loudly.
//!
//! The subject handed to a resolver is every wildcard span joined by a space;
//! the name echoed back in an answer is the first span.

use super::resolvers;
use crate::{Binding, DocumentSource, Reply, Rule, TemplateError};

/// The standard rule table, in dispatch order.
pub fn get() -> Result<Vec<Rule>, TemplateError> {
    Ok(vec![
        rule! { name: "birth date", template: "when was % born", handler: birth_date }?,
        rule! { name: "birth date (possessive)", template: "what is %'s birth date", handler: birth_date }?,
        rule! { name: "polar radius", template: "what is the polar radius of %", handler: polar_radius }?,
        rule! { name: "size", template: "how big is %", handler: polar_radius }?,
        rule! { name: "capital", template: "what is the capital of %", handler: country_capital }?,
        rule! { name: "people", template: "how many people live in %", handler: country_population }?,
        rule! { name: "population", template: "what is the population of %", handler: country_population }?,
        rule! { name: "language", template: "what language is spoken in %", handler: country_languages }?,
        rule! { name: "languages", template: "what languages are spoken in %", handler: country_languages }?,
        rule! { name: "official languages", template: "what are the official languages of %", handler: country_languages }?,
        rule! { name: "bye", template: "bye", handler: bye }?,
    ])
}

fn birth_date(binding: &Binding, source: &dyn DocumentSource) -> Reply {
    match resolvers::birth_date(source, &binding.joined()) {
        Ok(date) => Reply::line(date),
        Err(err) => Reply::line(format!("Could not find birth date: {err}")),
    }
}

fn polar_radius(binding: &Binding, source: &dyn DocumentSource) -> Reply {
    match resolvers::polar_radius(source, &binding.joined()) {
        Ok(radius) => Reply::line(radius),
        Err(err) => Reply::line(format!("Could not find polar radius: {err}")),
    }
}

fn country_capital(binding: &Binding, source: &dyn DocumentSource) -> Reply {
    match resolvers::country_capital(source, &binding.joined()) {
        Ok(capital) => Reply::line(format!("The capital of {} is {capital}", binding.first())),
        Err(err) => Reply::line(format!("Could not find capital: {err}")),
    }
}

fn country_population(binding: &Binding, source: &dyn DocumentSource) -> Reply {
    match resolvers::country_population(source, &binding.joined()) {
        Ok(population) => Reply::line(format!("The population of {} is {population}", binding.first())),
        Err(err) => Reply::line(format!("Could not find population: {err}")),
    }
}

fn country_languages(binding: &Binding, source: &dyn DocumentSource) -> Reply {
    match resolvers::country_languages(source, &binding.joined()) {
        Ok(languages) => {
            Reply::line(format!("The official language(s) of {}: {}", binding.first(), languages.join(", ")))
        }
        Err(err) => Reply::line(format!("Could not find language info: {err}")),
    }
}

fn bye(_: &Binding, _: &dyn DocumentSource) -> Reply {
    Reply::Terminate
}
