use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::Result;

/// Connection to the Ethereum node, type-erased so the rest of the code
/// never spells out the full provider generics. When a signer is
/// configured, the provider stack includes a wallet filler and every
/// state-changing call goes out signed by that account.
pub struct ChainClient {
    provider: DynProvider,
    chain_id: u64,
    signer_address: Option<Address>,
}

impl ChainClient {
    /// Connect via HTTP RPC, optionally with a signing account.
    pub async fn connect(rpc_url: &str, signer: Option<PrivateKeySigner>) -> Result<Self> {
        let url = rpc_url.parse()?;
        let (provider, signer_address) = match signer {
            Some(signer) => {
                let address = signer.address();
                let wallet = EthereumWallet::from(signer);
                let provider = ProviderBuilder::new().wallet(wallet).on_http(url).erased();
                (provider, Some(address))
            }
            None => (ProviderBuilder::new().on_http(url).erased(), None),
        };
        let chain_id = provider.get_chain_id().await?;
        Ok(Self {
            provider,
            chain_id,
            signer_address,
        })
    }

    /// Return the chain ID obtained at connection time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The account that signs submissions, if one was configured.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }

    /// Get the ETH balance of an address at the latest block.
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        let balance = self.provider.get_balance(address).await?;
        Ok(balance)
    }
}
