use super::locks::ClientLocks;
use crate::domain::client::ClientId;
use crate::domain::money::Balance;
use crate::domain::ports::{ClientStore, ClientStoreRef};
use crate::domain::pricing;
use crate::domain::product::Tray;
use crate::domain::ticket::Ticket;
use crate::error::{PaymentError, Result};
use std::sync::Arc;

/// The payment orchestrator.
///
/// Wraps the pure pricing engine with the balance policy and the atomic
/// debit: a payment either completes and returns a [`Ticket`], or fails with
/// a typed reason leaving the client's balance untouched. The whole
/// read-check-debit sequence for one client runs under that client's lock.
pub struct PaymentService {
    clients: ClientStoreRef,
    locks: Arc<ClientLocks>,
}

impl PaymentService {
    pub fn new(clients: ClientStoreRef, locks: Arc<ClientLocks>) -> Self {
        Self { clients, locks }
    }

    /// Prices the tray, enforces the balance policy and debits the client.
    ///
    /// Categories eligible for overdraft (Internal, VIP) may pay beyond
    /// their balance; everyone else needs `balance >= final_amount` or the
    /// payment is rejected with [`PaymentError::InsufficientBalance`]. There
    /// is no retry: a rejection is final for this attempt.
    pub async fn pay(&self, client_id: ClientId, tray: Tray) -> Result<Ticket> {
        let _guard = self.locks.acquire(client_id).await;

        let mut client = self
            .clients
            .get(client_id)
            .await?
            .ok_or(PaymentError::ClientNotFound(client_id))?;

        let quote = pricing::quote(client.category, &tray);

        if !client.category.allows_overdraft() && client.balance.value() < quote.final_amount {
            tracing::info!(
                client = %client.name,
                category = %client.category,
                required = %quote.final_amount,
                available = %client.balance,
                "payment rejected"
            );
            return Err(PaymentError::InsufficientBalance {
                required: quote.final_amount,
                available: client.balance.value(),
            });
        }

        client.balance -= Balance::new(quote.final_amount);
        let ticket = Ticket::issue(&client, tray, &quote);
        self.clients.save(client).await?;

        tracing::info!(
            ticket = %ticket.id,
            client = %ticket.client_name,
            total = %ticket.total,
            discount = %ticket.discount,
            charged = %ticket.final_amount,
            bundle = quote.is_bundle,
            "payment accepted"
        );
        Ok(ticket)
    }
}
