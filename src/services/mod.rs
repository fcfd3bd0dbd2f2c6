/*
 * Responsibility
 * - ドメイン横断の service (認証、公開 ID、所有者チェック)
 */
pub mod auth;
pub mod id_codec;
pub mod ownership;
