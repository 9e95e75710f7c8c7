/**
 * COOPWATCH KERNEL - Dashboard de surveillance d'un élevage de volailles
 *
 * RÔLE : Store de notifications, métriques dérivées, état de sélection du
 * shell, rendu des 6 panneaux et transport HTTP vers le navigateur.
 *
 * FLUX : fixtures → métriques → rendu des panneaux. Seuls le store
 * (lu/rejeté) et le shell (sélections) sont modifiés par l'utilisateur.
 */

pub mod config;
pub mod error;
pub mod fixtures;
pub mod health;
pub mod http;
pub mod metrics;
pub mod models;
pub mod motion;
pub mod notifications;
pub mod panels;
pub mod shell;
pub mod state;
pub mod style;
