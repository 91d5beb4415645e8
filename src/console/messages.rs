//! User-facing notification texts.

pub const FETCH_FAILED: &str = "Errore durante il recupero dei dati.";
pub const PIZZAS_FETCH_FAILED: &str = "Errore durante il recupero delle pizze.";

pub const ORDER_NOT_FOUND: &str = "Ordine non trovato.";
pub const PIZZAS_NO_LONGER_AVAILABLE: &str = "Alcune pizze dell'ordine non sono più disponibili.";

pub const CREATE_FIELDS_MISSING: &str = "Compila tutti i campi per creare un ordine.";
pub const UPDATE_FIELDS_MISSING: &str = "Compila tutti i campi per aggiornare l'ordine.";
pub const INVALID_PIZZA_NAMES: &str = "Alcuni nomi delle pizze non sono validi.";
pub const STATUS_CHANGE_NOT_ALLOWED: &str = "Cambio di stato non consentito.";

pub const ORDER_CREATED: &str = "Ordine creato con successo!";
pub const ORDER_CREATE_FAILED: &str = "Errore durante la creazione dell'ordine.";
pub const ORDER_UPDATED: &str = "Ordine aggiornato con successo!";
pub const ORDER_UPDATE_FAILED: &str = "Errore durante l'aggiornamento dell'ordine.";
pub const ORDER_DELETED: &str = "Ordine eliminato con successo!";
pub const ORDER_DELETE_FAILED: &str = "Errore durante l'eliminazione dell'ordine.";
pub const ORDER_STATUS_UPDATED: &str = "Stato dell'ordine aggiornato con successo!";
pub const ORDER_STATUS_UPDATE_FAILED: &str = "Errore durante l'aggiornamento dello stato dell'ordine.";

pub const PIZZA_CREATED: &str = "Pizza creata con successo!";
pub const PIZZA_CREATE_FAILED: &str = "Errore durante la creazione della pizza.";
pub const PIZZA_UPDATED: &str = "Pizza aggiornata con successo!";
pub const PIZZA_UPDATE_FAILED: &str = "Errore durante l'aggiornamento della pizza.";
pub const PIZZA_DELETED: &str = "Pizza eliminata con successo!";
pub const PIZZA_DELETE_FAILED: &str = "Errore durante la cancellazione della pizza.";
