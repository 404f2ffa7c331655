/*
 * Responsibility
 * - handler から呼ばれる pure なドメインロジック
 * - observer (ログ等の副作用) は trait として注入する
 */
pub mod greeting;
pub mod observer;
